//! Integration tests for loading engine configuration from disk

#[cfg(feature = "serialization")]
mod config_file_tests {
    use std::fs;
    use tempfile::TempDir;

    use quill::prelude::*;

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quill.json");
        fs::write(
            &path,
            r#"{
                "costs": { "substitution": 0.5 },
                "overrides": [ { "a": "k", "b": "s", "cost": 0.25 } ],
                "variant": "levenshtein"
            }"#,
        )
        .unwrap();

        let config = EngineConfig::from_path(&path).unwrap();
        let engine = config.build_engine().unwrap();

        assert_eq!(engine.compute("kitten", "sitting", config.variant).unwrap(), 1.75);
        assert_eq!(engine.compute("goat", "boat", config.variant).unwrap(), 0.5);
    }

    #[test]
    fn test_write_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("saved.json");

        let engine = DistanceEngine::builder()
            .deletion(2.0)
            .transposition(1.5)
            .substitution_override('é', 'e', 0.1)
            .build()
            .unwrap();
        let file = fs::File::create(&path).unwrap();
        EngineConfig::from(&engine).to_writer(file).unwrap();

        let loaded = EngineConfig::from_path(&path).unwrap().build_engine().unwrap();
        assert_eq!(loaded, engine);
        assert_eq!(loaded.compute("café", "cafe", Variant::Levenshtein).unwrap(), 0.1);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = EngineConfig::from_path(temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_inconsistent_costs_load_but_fail_to_compute() {
        let config = EngineConfig::from_json_str(
            r#"{ "costs": { "addition": 2.0, "deletion": 2.0, "transposition": 1.0 } }"#,
        )
        .unwrap();

        let engine = config.build_engine().unwrap();
        assert!(matches!(
            engine.compute("ab", "ba", Variant::DamerauLevenshtein),
            Err(DistanceError::InconsistentCosts { .. })
        ));
    }
}
