use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;

    #[test]
    fn test_local_config_default() {
        let config = LocalConfig::default();
        assert_eq!(config.embedding_dim, crate::constants::LOCAL_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, crate::constants::DEFAULT_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
        assert!(config.tokenizer_path.as_os_str().is_empty());
    }

    #[test]
    fn test_local_config_new_infers_tokenizer() {
        let config = LocalConfig::new("/models/minilm");
        assert_eq!(config.model_dir, PathBuf::from("/models/minilm"));
        assert_eq!(
            config.tokenizer_path,
            PathBuf::from("/models/minilm/tokenizer.json")
        );
    }

    #[test]
    fn test_local_config_tokenizer_override() {
        let config = LocalConfig::new("/models/minilm").tokenizer_path("/tok/tokenizer.json");
        assert_eq!(config.tokenizer_path, PathBuf::from("/tok/tokenizer.json"));
    }

    #[test]
    fn test_local_config_stub_validates() {
        let config = LocalConfig::stub();
        assert!(config.testing_stub);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_local_config_empty_dir_rejected() {
        let config = LocalConfig::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_local_config_missing_dir_rejected() {
        let config = LocalConfig::new("/nonexistent/model-dir");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_local_config_zero_dim_rejected() {
        let config = LocalConfig {
            embedding_dim: 0,
            ..LocalConfig::stub()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_local_config_model_available_false() {
        assert!(!LocalConfig::default().model_available());
        assert!(!LocalConfig::new("/nonexistent").model_available());
    }
}

mod stub_tests {
    use super::*;

    #[test]
    fn test_stub_embedding_dimension() {
        let embedder = LocalEmbedder::stub();
        let vector = embedder.embed("Python").expect("stub embed");
        assert_eq!(vector.len(), embedder.embedding_dim());
    }

    #[test]
    fn test_stub_is_deterministic() {
        let embedder = LocalEmbedder::stub();
        let a = embedder.embed("Kubernetes").expect("embed");
        let b = embedder.embed("Kubernetes").expect("embed");
        assert_eq!(a, b);
    }

    #[test]
    fn test_stub_distinct_texts_differ() {
        let embedder = LocalEmbedder::stub();
        let a = embedder.embed("Python").expect("embed");
        let b = embedder.embed("AWS").expect("embed");
        assert_ne!(a, b);
    }

    #[test]
    fn test_stub_output_is_unit_norm() {
        let embedder = LocalEmbedder::stub();
        let vector = embedder.embed("Terraform").expect("embed");
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {}", norm);
    }

    #[test]
    fn test_stub_casing_changes_vector() {
        // Stub identity is exact-text; case folding happens upstream.
        let embedder = LocalEmbedder::stub();
        let a = embedder.embed("Python").expect("embed");
        let b = embedder.embed("python").expect("embed");
        assert_ne!(a, b);
    }

    #[test]
    fn test_stub_batch_index_aligned() {
        let embedder = LocalEmbedder::stub();
        let texts = vec![
            "Python".to_string(),
            "AWS".to_string(),
            "Python".to_string(),
        ];
        let batch = embedder.embed_batch(&texts).expect("batch");

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0], batch[2]);
        assert_ne!(batch[0], batch[1]);
    }

    #[test]
    fn test_stub_empty_batch() {
        let embedder = LocalEmbedder::stub();
        let batch = embedder.embed_batch(&[]).expect("batch");
        assert!(batch.is_empty());
    }

    #[test]
    fn test_stub_flags() {
        let embedder = LocalEmbedder::stub();
        assert!(embedder.is_stub());
        assert_eq!(
            embedder.embedding_dim(),
            crate::constants::LOCAL_EMBEDDING_DIM
        );
    }

    #[test]
    fn test_load_stub_config() {
        let embedder = LocalEmbedder::load(LocalConfig::stub()).expect("stub load");
        assert!(embedder.is_stub());
    }

    #[test]
    fn test_load_missing_model_fails() {
        let config = LocalConfig::new("/nonexistent/model-dir");
        assert!(LocalEmbedder::load(config).is_err());
    }

    #[test]
    fn test_debug_format() {
        let embedder = LocalEmbedder::stub();
        let debug_str = format!("{:?}", embedder);
        assert!(debug_str.contains("LocalEmbedder"));
        assert!(debug_str.contains("Stub"));
    }
}
