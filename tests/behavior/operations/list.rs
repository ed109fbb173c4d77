use crate::*;
use selectel_fs::error::Result;
use selectel_fs::storage::SelectelFs;
use selectel_fs::storage::contract::{Config, EntryType, FilesystemAdapter};
use uuid::Uuid;

pub fn tests(adapter: &SelectelFs, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        adapter,
        test_list_empty_prefix,
        test_list_multiple_files,
        test_list_nested_files,
        test_list_entry_shape,
        test_list_reports_file_sizes,
        test_list_with_special_chars
    ));
}

async fn test_list_empty_prefix(adapter: SelectelFs) -> Result<()> {
    let dir = TEST_FIXTURE.new_dir_path();

    let entries = adapter.list_contents(&dir, false).await?;
    assert!(entries.is_empty(), "unexpected entries: {entries:?}");
    Ok(())
}

async fn test_list_multiple_files(adapter: SelectelFs) -> Result<()> {
    let dir = TEST_FIXTURE.new_dir_path();
    let mut expected = Vec::new();

    for _ in 0..5 {
        let path = format!("{dir}{}", Uuid::new_v4());
        adapter.write(&path, b"x".to_vec(), &Config::new()).await?;
        expected.push(path);
    }

    let mut listed: Vec<_> = adapter
        .list_contents(&dir, false)
        .await?
        .into_iter()
        .filter(|entry| !entry.is_dir())
        .map(|entry| entry.path)
        .collect();

    listed.sort();
    expected.sort();
    assert_eq!(listed, expected);
    Ok(())
}

async fn test_list_nested_files(adapter: SelectelFs) -> Result<()> {
    let dir = TEST_FIXTURE.new_dir_path();
    let top = format!("{dir}top.txt");
    let nested = format!("{dir}sub/inner.txt");

    adapter.write(&top, b"top".to_vec(), &Config::new()).await?;
    adapter.write(&nested, b"inner".to_vec(), &Config::new()).await?;

    let paths: Vec<_> = adapter
        .list_contents(&dir, true)
        .await?
        .into_iter()
        .map(|entry| entry.path)
        .collect();

    assert!(paths.contains(&top), "missing {top} in {paths:?}");
    assert!(paths.contains(&nested), "missing {nested} in {paths:?}");
    Ok(())
}

async fn test_list_entry_shape(adapter: SelectelFs) -> Result<()> {
    let dir = TEST_FIXTURE.new_dir_path();
    let path = format!("{dir}report.csv");

    adapter.write(&path, b"a,b,c".to_vec(), &Config::new()).await?;

    let entry = adapter
        .list_contents(&dir, false)
        .await?
        .into_iter()
        .find(|entry| entry.path == path)
        .expect("written file should be listed");

    assert_eq!(entry.entry_type, EntryType::File);
    assert_eq!(entry.size, 5);
    assert!(entry.timestamp >= 0);
    assert!(!entry.mimetype.is_empty());
    assert_eq!(adapter.file_size(&path).await?.file_size, Some(5));

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["type"], "file");
    assert_eq!(json["path"], path.as_str());
    Ok(())
}

async fn test_list_reports_file_sizes(adapter: SelectelFs) -> Result<()> {
    let dir = TEST_FIXTURE.new_dir_path();
    let mut expected = Vec::new();

    for name in ["a.bin", "b.bin", "nested/c.bin"] {
        let (path, content, size) =
            TEST_FIXTURE.new_file_with_range(format!("{dir}{name}"), 1..4096);
        adapter.write(&path, content, &Config::new()).await?;
        expected.push((path, size as u64));
    }

    let mut listed: Vec<_> = adapter
        .list_contents(&dir, true)
        .await?
        .into_iter()
        .filter(|entry| !entry.is_dir())
        .map(|entry| (entry.path, entry.size))
        .collect();
    listed.sort();
    expected.sort();
    assert_eq!(listed, expected);

    let (path, size) = &expected[0];
    let entry = adapter
        .get_metadata(path)
        .await?
        .expect("written file should have metadata");
    assert_eq!(entry.path, *path);
    assert_eq!(entry.size, *size);
    Ok(())
}

async fn test_list_with_special_chars(adapter: SelectelFs) -> Result<()> {
    let dir = TEST_FIXTURE.new_dir_path();
    let path = format!("{dir}file with spaces & symbols.txt");

    adapter.write(&path, b"special".to_vec(), &Config::new()).await?;

    let found = adapter
        .list_contents(&dir, false)
        .await?
        .iter()
        .any(|entry| entry.path == path);
    assert!(found, "{path} should be listed");
    Ok(())
}
