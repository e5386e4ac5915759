// src/sentiment/mod.rs

//! Sentiment classification behind a small port so the HTTP layer never
//! touches the model crate directly.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rust_bert::pipelines::sentiment::{SentimentModel, SentimentPolarity};
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    #[serde(rename = "POSITIVE")]
    Positive,
    #[serde(rename = "NEGATIVE")]
    Negative,
}

/// One label and confidence score for a whole text span.
#[derive(Debug, Clone, Serialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Sentiment>;
}

struct ClassifyRequest {
    text: String,
    respond: oneshot::Sender<Sentiment>,
}

/// DistilBERT SST-2 classifier.
///
/// The model is !Sync and predictions block, so it lives on a dedicated OS
/// thread and requests cross over a channel. The handle itself is cheap to
/// share and never re-initialized after startup.
pub struct BertSentimentClassifier {
    tx: mpsc::Sender<ClassifyRequest>,
}

impl BertSentimentClassifier {
    /// Spawns the model thread and waits for the pretrained weights to load.
    /// A load failure is returned here so the caller can record the capability
    /// as absent instead of serving with a dead worker.
    pub async fn spawn() -> Result<Self> {
        let (tx, mut rx) = mpsc::channel::<ClassifyRequest>(32);
        let (ready_tx, ready_rx) = oneshot::channel::<Result<()>>();

        std::thread::Builder::new()
            .name("sentiment-model".to_string())
            .spawn(move || {
                let model = match SentimentModel::new(Default::default()) {
                    Ok(model) => {
                        let _ = ready_tx.send(Ok(()));
                        model
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.into()));
                        return;
                    }
                };
                info!("Sentiment model thread ready");

                while let Some(request) = rx.blocking_recv() {
                    let mut predictions = model.predict(&[request.text.as_str()]);
                    if let Some(prediction) = predictions.pop() {
                        let _ = request.respond.send(Sentiment {
                            label: match prediction.polarity {
                                SentimentPolarity::Positive => SentimentLabel::Positive,
                                SentimentPolarity::Negative => SentimentLabel::Negative,
                            },
                            score: prediction.score,
                        });
                    }
                }
            })?;

        ready_rx.await??;
        Ok(Self { tx })
    }
}

#[async_trait]
impl SentimentClassifier for BertSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        let (respond, rx) = oneshot::channel();
        self.tx
            .send(ClassifyRequest {
                text: text.to_string(),
                respond,
            })
            .await
            .map_err(|_| anyhow!("sentiment worker has shut down"))?;
        rx.await
            .map_err(|_| anyhow!("sentiment worker dropped the request"))
    }
}

/// Truncate to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
