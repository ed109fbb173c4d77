use crate::*;
use selectel_fs::error::{Error, Result};
use selectel_fs::storage::SelectelFs;
use selectel_fs::storage::contract::{Config, FilesystemAdapter};

pub fn tests(adapter: &SelectelFs, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        adapter,
        test_copy_file,
        test_copy_into_directory_path,
        test_copy_overwrites_destination,
        test_copy_non_existent_file
    ));
}

async fn test_copy_file(adapter: SelectelFs) -> Result<()> {
    let (src, content, _) = TEST_FIXTURE.new_file();
    let dest = TEST_FIXTURE.new_file_path();

    adapter.write(&src, content.clone(), &Config::new()).await?;
    adapter.copy(&src, &dest, &Config::new()).await?;

    assert_eq!(adapter.read(&dest).await?, content);
    assert_eq!(adapter.read(&src).await?, content, "source must be kept");
    Ok(())
}

async fn test_copy_into_directory_path(adapter: SelectelFs) -> Result<()> {
    let (src, content, _) = TEST_FIXTURE.new_file();
    let dest_dir = TEST_FIXTURE.new_dir_path();
    let dest = format!("{dest_dir}copied.bin");

    adapter.write(&src, content.clone(), &Config::new()).await?;
    adapter.copy(&src, &dest, &Config::new()).await?;

    assert_eq!(adapter.read(&dest).await?, content);
    Ok(())
}

async fn test_copy_overwrites_destination(adapter: SelectelFs) -> Result<()> {
    let src = TEST_FIXTURE.new_file_path();
    let dest = TEST_FIXTURE.new_file_path();

    adapter.write(&src, b"new".to_vec(), &Config::new()).await?;
    adapter.write(&dest, b"old content".to_vec(), &Config::new()).await?;
    adapter.copy(&src, &dest, &Config::new()).await?;

    assert_eq!(adapter.read(&dest).await?, b"new".to_vec());
    Ok(())
}

async fn test_copy_non_existent_file(adapter: SelectelFs) -> Result<()> {
    let src = TEST_FIXTURE.new_file_path();
    let dest = TEST_FIXTURE.new_file_path();

    let err = adapter.copy(&src, &dest, &Config::new()).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        Error::CopyFailed { ref src_path, ref dest_path, .. }
            if *src_path == src && *dest_path == dest
    ));
    assert!(!adapter.file_exists(&dest).await?);
    Ok(())
}
