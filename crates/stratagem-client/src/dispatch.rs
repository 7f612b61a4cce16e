use std::sync::RwLock;

use serde::Serialize;
use serde_json::Value;
use stratagem_core::schema::FieldValues;
use stratagem_core::transform::transform;
use stratagem_protocol::algo::Algorithm;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::SimulationClient;
use crate::error::{ClientError, ClientResult};

/// Uniform result tracking for any invocation. At rest exactly one of
/// `loading`, `error`, `data` holds; all clear only in the idle state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultState {
    pub data: Option<Value>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ResultState {
    pub fn is_idle(&self) -> bool {
        self.data.is_none() && !self.loading && self.error.is_none()
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// One dispatcher serves every algorithm: the active algorithm is a call
/// parameter, not baked into per-algorithm instances. The rendering
/// layer observes state through `snapshot`.
///
/// Concurrent `execute` calls are last-write-wins and `reset` does not
/// cancel an in-flight request: a late resolution may overwrite a fresh
/// idle state. Callers are expected to serialize submissions; the CLI
/// awaits each one.
pub struct Dispatcher {
    client: SimulationClient,
    state: RwLock<ResultState>,
}

impl Dispatcher {
    pub fn new(client: SimulationClient) -> Self {
        Self {
            client,
            state: RwLock::new(ResultState::default()),
        }
    }

    pub fn snapshot(&self) -> ResultState {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Restore idle synchronously. Purely local: no cancellation signal
    /// reaches the network layer.
    pub fn reset(&self) {
        *self.state.write().expect("state lock poisoned") = ResultState::default();
    }

    /// Transform the raw values, POST them, and settle the tri-state.
    /// Returns the response on success, None on any failure (the message
    /// is left in the state).
    pub async fn execute(&self, name: &str, values: &FieldValues) -> Option<Value> {
        let run_id = short_run_id();
        {
            let mut st = self.state.write().expect("state lock poisoned");
            st.loading = true;
            st.error = None;
        }

        info!("🚀 [{}] Running '{}'", run_id, name);
        match self.invoke(name, values).await {
            Ok(value) => {
                info!("✅ [{}] '{}' completed", run_id, name);
                *self.state.write().expect("state lock poisoned") = ResultState {
                    data: Some(value.clone()),
                    loading: false,
                    error: None,
                };
                Some(value)
            }
            Err(e) => {
                let msg = e.to_string();
                warn!("❌ [{}] '{}' failed: {}", run_id, name, msg);
                *self.state.write().expect("state lock poisoned") = ResultState {
                    data: None,
                    loading: false,
                    error: Some(msg),
                };
                None
            }
        }
    }

    async fn invoke(&self, name: &str, values: &FieldValues) -> ClientResult<Value> {
        let algo = Algorithm::parse(name).ok_or_else(|| {
            ClientError::Core(stratagem_core::error::CoreError::Validation(format!(
                "Algorithm '{name}' is not implemented"
            )))
        })?;
        let payload = transform(name, values)?;
        self.client.run(algo, &payload).await
    }
}

fn short_run_id() -> String {
    let id = Uuid::new_v4().to_string();
    id.split('-').next().unwrap_or("run").to_string()
}
