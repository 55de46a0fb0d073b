//! Request/response channel to the host
//!
//! Also holds the result envelope shared by every transport: `{"id", "type":
//! "result", "success", "result" | "error": {"code", "message"}}`.

use serde::Deserialize;
use serde_json::Value;

use super::request::HostRequest;
use crate::error::{PanelError, PanelResult};

/// One blocking request/response exchange with the host.
///
/// Implementations return the `result` payload on success and
/// `PanelError::Remote` when the host answers with an error.
pub trait HostChannel {
    fn call(&mut self, request: &HostRequest) -> PanelResult<Value>;
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultEnvelope {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<RemoteError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ResultEnvelope {
    pub fn answers(&self, id: u64) -> bool {
        self.id == Some(id) && self.kind == "result"
    }

    pub fn into_result(self) -> PanelResult<Value> {
        if self.success {
            return Ok(self.result);
        }
        match self.error {
            Some(err) => Err(PanelError::remote(err.code, err.message)),
            None => Err(PanelError::remote("unknown_error", "")),
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted channel for exercising the client and panel without a host

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Script {
        requests: Vec<HostRequest>,
        responses: VecDeque<PanelResult<Value>>,
    }

    /// Cloneable handle; clones share the same script and request log
    #[derive(Clone, Default)]
    pub struct MockChannel {
        script: Rc<RefCell<Script>>,
    }

    impl MockChannel {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, result: Value) -> &Self {
            self.script.borrow_mut().responses.push_back(Ok(result));
            self
        }

        pub fn fail(&self, code: &str, message: &str) -> &Self {
            self.script
                .borrow_mut()
                .responses
                .push_back(Err(PanelError::remote(code, message)));
            self
        }

        pub fn requests(&self) -> Vec<HostRequest> {
            self.script.borrow().requests.clone()
        }

        pub fn commands(&self) -> Vec<&'static str> {
            self.script.borrow().requests.iter().map(|r| r.command()).collect()
        }

        pub fn pending(&self) -> usize {
            self.script.borrow().responses.len()
        }
    }

    impl HostChannel for MockChannel {
        fn call(&mut self, request: &HostRequest) -> PanelResult<Value> {
            let mut script = self.script.borrow_mut();
            script.requests.push(request.clone());
            script
                .responses
                .pop_front()
                .unwrap_or_else(|| Err(PanelError::Channel("no scripted response".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let envelope: ResultEnvelope = serde_json::from_str(
            r#"{"id": 3, "type": "result", "success": true, "result": {"success": true}}"#,
        )
        .unwrap();

        assert!(envelope.answers(3));
        assert!(!envelope.answers(4));
        assert_eq!(envelope.into_result().unwrap()["success"], true);
    }

    #[test]
    fn test_error_envelope() {
        let envelope: ResultEnvelope = serde_json::from_str(
            r#"{"id": 1, "type": "result", "success": false,
                "error": {"code": "not_found", "message": "Account not found"}}"#,
        )
        .unwrap();

        let err = envelope.into_result().unwrap_err();
        assert!(err.is_remote());
        assert_eq!(err.to_string(), "Account not found");
    }

    #[test]
    fn test_error_without_detail() {
        let envelope: ResultEnvelope =
            serde_json::from_str(r#"{"id": 1, "type": "result", "success": false}"#).unwrap();
        let err = envelope.into_result().unwrap_err();

        assert_eq!(err.banner_message("Failed to save plan"), "Failed to save plan");
    }

    #[test]
    fn test_event_is_not_an_answer() {
        let envelope: ResultEnvelope =
            serde_json::from_str(r#"{"id": 1, "type": "event", "event": {}}"#).unwrap();
        assert!(!envelope.answers(1));
    }
}
