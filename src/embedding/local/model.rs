use candle_core::{DType, Device, Result, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

/// BERT encoder wrapped for sentence-embedding use (mean pooling happens in
/// the caller; this type only owns the transformer forward pass).
pub(crate) struct BertForEmbedding {
    bert: BertModel,
    hidden_size: usize,
}

impl BertForEmbedding {
    pub(crate) fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb.clone(), &config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }

    /// Runs the encoder: `[batch, seq]` token ids to `[batch, seq, hidden]`
    /// hidden states.
    pub(crate) fn forward(&self, input_ids: &Tensor, token_type_ids: &Tensor) -> Result<Tensor> {
        self.bert.forward(input_ids, token_type_ids, None)
    }

    pub(crate) fn hidden_size(&self) -> usize {
        self.hidden_size
    }
}
