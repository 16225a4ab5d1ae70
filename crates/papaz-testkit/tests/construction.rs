//! Stores reject missing construction arguments before any I/O.

use papaz_adapters::{JsonFile, JsonFileSync, Memory, MemorySync};
use papaz_core::{ConstructionError, Papaz, PapazSync};
use papaz_testkit::{Data, TempJsonFile};

#[test]
fn test_async_store_requires_adapter_and_default() {
    let err = Papaz::<Data, Memory<Data>>::builder().build().err();
    assert_eq!(err, Some(ConstructionError::MissingAdapter));

    let err = Papaz::<Data, Memory<Data>>::builder()
        .default_data(Data::default())
        .build()
        .err();
    assert_eq!(err, Some(ConstructionError::MissingAdapter));

    let err = Papaz::<Data, Memory<Data>>::builder()
        .adapter(Memory::new())
        .build()
        .err();
    assert_eq!(err, Some(ConstructionError::MissingDefaultData));
}

#[test]
fn test_sync_store_requires_adapter_and_default() {
    let err = PapazSync::<Data, MemorySync<Data>>::builder().build().err();
    assert_eq!(err, Some(ConstructionError::MissingAdapter));

    let err = PapazSync::<Data, MemorySync<Data>>::builder()
        .adapter(MemorySync::new())
        .build()
        .err();
    assert_eq!(err, Some(ConstructionError::MissingDefaultData));
}

#[test]
fn test_failed_construction_touches_nothing() {
    let file = TempJsonFile::new();

    let err = Papaz::<Data, JsonFile<Data>>::builder()
        .adapter(JsonFile::new(file.path()))
        .build()
        .err();
    assert_eq!(err, Some(ConstructionError::MissingDefaultData));

    let err = PapazSync::<Data, JsonFileSync<Data>>::builder()
        .adapter(JsonFileSync::new(file.path()))
        .build()
        .err();
    assert_eq!(err, Some(ConstructionError::MissingDefaultData));

    assert!(!file.path().exists());
}

#[test]
fn test_successful_construction_is_lazy() {
    let file = TempJsonFile::new();

    let db = PapazSync::<Data, _>::builder()
        .adapter(JsonFileSync::<Data>::new(file.path()))
        .default_data(Data::default())
        .build()
        .unwrap();

    assert!(!db.is_hydrated());
    assert!(!file.path().exists());
}
