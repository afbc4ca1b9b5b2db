mod mocks;

use address_book::repositories::DirectoryRepository;
use address_book::{Directory, Name, Record};
use mocks::MockDirectoryRepository;

fn sample_directory(names: &[&str]) -> Directory {
    let mut directory = Directory::new();
    for name in names {
        directory.add_record(Record::new(Name::new(*name).unwrap()));
    }
    directory
}

#[test]
fn test_mock_repository_load_empty() {
    let repo = MockDirectoryRepository::new();
    let directory = repo.load().unwrap();
    assert!(directory.is_empty());
    assert_eq!(repo.get_call_count("load"), 1);
}

#[test]
fn test_mock_repository_save_then_load() {
    let repo = MockDirectoryRepository::new();
    repo.save(&sample_directory(&["Oleh", "Anna"])).unwrap();

    let directory = repo.load().unwrap();
    assert_eq!(directory.len(), 2);
    assert_eq!(repo.get_call_count("save"), 1);
    assert_eq!(repo.get_call_count("load"), 1);
}

#[test]
fn test_mock_repository_with_directory() {
    let repo = MockDirectoryRepository::with_directory(sample_directory(&["Oleh"]));
    assert!(repo.load().unwrap().find_record("oleh").is_some());
    assert_eq!(repo.get_call_count("save"), 0);
}
