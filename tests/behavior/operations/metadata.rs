use crate::*;
use selectel_fs::error::{Error, MetadataKind, Result};
use selectel_fs::storage::SelectelFs;
use selectel_fs::storage::constants::DIRECTORY_CONTENT_TYPE;
use selectel_fs::storage::contract::{Config, EntryType, FilesystemAdapter};

pub fn tests(adapter: &SelectelFs, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        adapter,
        test_file_exists,
        test_directory_exists_matches_file_exists,
        test_created_directory_is_visible,
        test_file_size,
        test_mime_type,
        test_last_modified,
        test_metadata_of_missing_file,
        test_visibility_is_unsupported,
        test_get_url
    ));
}

async fn test_file_exists(adapter: SelectelFs) -> Result<()> {
    let (path, content, _) = TEST_FIXTURE.new_file();

    assert!(!adapter.file_exists(&path).await?);
    adapter.write(&path, content, &Config::new()).await?;
    assert!(adapter.file_exists(&path).await?);
    Ok(())
}

async fn test_directory_exists_matches_file_exists(adapter: SelectelFs) -> Result<()> {
    let (path, content, _) = TEST_FIXTURE.new_file();

    assert_eq!(
        adapter.directory_exists(&path).await?,
        adapter.file_exists(&path).await?
    );
    adapter.write(&path, content, &Config::new()).await?;
    assert!(adapter.directory_exists(&path).await?);
    Ok(())
}

async fn test_created_directory_is_visible(adapter: SelectelFs) -> Result<()> {
    let parent = TEST_FIXTURE.new_dir_path();
    let dir = format!("{parent}photos");

    adapter.create_directory(&dir, &Config::new()).await?;

    assert!(adapter.directory_exists(&dir).await?);
    assert!(adapter.file_exists(&dir).await?);

    let listed = adapter.list_contents(&parent, false).await?;
    let entry = listed
        .iter()
        .find(|entry| entry.path == dir)
        .unwrap_or_else(|| panic!("{dir} should be listed: {listed:?}"));
    assert_eq!(entry.entry_type, EntryType::Dir);
    assert_eq!(entry.mimetype, DIRECTORY_CONTENT_TYPE);

    let mime_type = adapter.mime_type(&entry.path).await?.mime_type;
    assert_eq!(mime_type.as_deref(), Some(DIRECTORY_CONTENT_TYPE));
    assert_eq!(adapter.file_size(&dir).await?.file_size, Some(0));

    adapter.delete(&entry.path).await?;
    assert!(!adapter.directory_exists(&dir).await?);
    Ok(())
}

async fn test_file_size(adapter: SelectelFs) -> Result<()> {
    let (path, content, size) = TEST_FIXTURE.new_file();
    adapter.write(&path, content, &Config::new()).await?;

    let attributes = adapter.file_size(&path).await?;
    assert_eq!(attributes.path, path);
    assert_eq!(attributes.file_size, Some(size as u64));
    assert_eq!(attributes.mime_type, None);
    Ok(())
}

async fn test_mime_type(adapter: SelectelFs) -> Result<()> {
    let path = TEST_FIXTURE.new_file_path();
    adapter.write(&path, b"{}".to_vec(), &Config::new()).await?;

    let attributes = adapter.mime_type(&path).await?;
    let mime_type = attributes.mime_type.expect("mime type should be set");
    assert!(!mime_type.is_empty());
    assert_eq!(attributes.file_size, None);
    Ok(())
}

async fn test_last_modified(adapter: SelectelFs) -> Result<()> {
    let path = TEST_FIXTURE.new_file_path();
    adapter.write(&path, b"time".to_vec(), &Config::new()).await?;

    let last_modified = adapter
        .last_modified(&path)
        .await?
        .last_modified
        .expect("timestamp should be set");
    // Zero when the backend reports no usable timestamp.
    assert!(last_modified >= 0);
    Ok(())
}

async fn test_metadata_of_missing_file(adapter: SelectelFs) -> Result<()> {
    let path = TEST_FIXTURE.new_file_path();

    let err = adapter.file_size(&path).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        Error::MetadataRetrievalFailed {
            kind: MetadataKind::FileSize,
            ..
        }
    ));

    let err = adapter.mime_type(&path).await.unwrap_err();
    assert!(matches!(
        err,
        Error::MetadataRetrievalFailed {
            kind: MetadataKind::MimeType,
            ..
        }
    ));

    let err = adapter.last_modified(&path).await.unwrap_err();
    assert!(matches!(
        err,
        Error::MetadataRetrievalFailed {
            kind: MetadataKind::LastModified,
            ..
        }
    ));
    Ok(())
}

async fn test_visibility_is_unsupported(adapter: SelectelFs) -> Result<()> {
    let (path, content, _) = TEST_FIXTURE.new_file();
    adapter.write(&path, content, &Config::new()).await?;

    let err = adapter.set_visibility(&path, "public").await.unwrap_err();
    assert!(matches!(err, Error::SetVisibilityFailed { ref visibility, .. } if visibility == "public"));

    let err = adapter.visibility(&path).await.unwrap_err();
    assert!(matches!(
        err,
        Error::MetadataRetrievalFailed {
            kind: MetadataKind::Visibility,
            ..
        }
    ));
    Ok(())
}

async fn test_get_url(adapter: SelectelFs) -> Result<()> {
    assert_eq!(
        adapter.get_url("photos/cat.jpg"),
        format!("{TEST_BASE_URL}/photos/cat.jpg")
    );
    assert_eq!(
        adapter.get_url("/photos/cat.jpg"),
        format!("{TEST_BASE_URL}/photos/cat.jpg")
    );
    Ok(())
}
