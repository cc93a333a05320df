//! Conformance checks for the ProjectSettings contract.

use scalaforge_core::settings::{
    CompilerLibrary, CompilerLibraryHolder, LibraryLevel, ProjectSettings, ProjectSettingsData,
};

#[test]
fn accessors_are_stable_for_a_fixed_snapshot() {
    let settings = ProjectSettingsData::new(
        true,
        LibraryLevel::Project,
        "scala-compiler-2.13".to_string(),
    );

    let first = (
        settings.is_scala_first(),
        settings.compiler_library_level(),
        settings.compiler_library_name().to_string(),
    );

    for _ in 0..10 {
        assert_eq!(settings.is_scala_first(), first.0);
        assert_eq!(settings.compiler_library_level(), first.1);
        assert_eq!(settings.compiler_library_name(), first.2);
    }
}

#[test]
fn level_is_always_a_known_variant() {
    for level in LibraryLevel::ALL {
        let settings = ProjectSettingsData::new(false, level, "scalac".to_string());
        assert!(LibraryLevel::ALL.contains(&settings.compiler_library_level()));
    }
}

#[test]
fn snapshot_is_shareable_across_threads() {
    let settings = std::sync::Arc::new(ProjectSettingsData::new(
        true,
        LibraryLevel::Global,
        "scala-sdk-3".to_string(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let settings = settings.clone();
            std::thread::spawn(move || {
                assert!(settings.is_scala_first());
                assert_eq!(settings.compiler_library_level(), LibraryLevel::Global);
                assert_eq!(settings.compiler_library_name(), "scala-sdk-3");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn holder_capability_usable_on_its_own() {
    fn library_of(holder: &dyn CompilerLibraryHolder) -> Option<CompilerLibrary> {
        holder.compiler_library()
    }

    let configured =
        ProjectSettingsData::new(false, LibraryLevel::Module, "scalac".to_string());
    let unconfigured = ProjectSettingsData::default();

    assert_eq!(
        library_of(&configured),
        Some(CompilerLibrary {
            name: "scalac".to_string(),
            level: LibraryLevel::Module,
        })
    );
    assert_eq!(library_of(&unconfigured), None);
}
