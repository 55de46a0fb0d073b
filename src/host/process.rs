//! Newline-delimited JSON transport
//!
//! Every request goes out as one JSON line carrying a fresh `id`. Lines that
//! come back with a different id, or that are not results (subscription
//! events, log noise), are skipped until the matching answer arrives.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use serde_json::Value;

use super::channel::{HostChannel, ResultEnvelope};
use super::request::HostRequest;
use crate::config::Settings;
use crate::error::{PanelError, PanelResult};

/// JSON-lines request/response over any reader/writer pair
pub struct JsonLinesChannel<R, W> {
    reader: R,
    writer: W,
    next_id: u64,
}

impl<R: BufRead, W: Write> JsonLinesChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            next_id: 0,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn send(&mut self, id: u64, request: &HostRequest) -> PanelResult<()> {
        let mut message = serde_json::to_value(request)
            .map_err(|e| PanelError::Json(format!("Failed to serialize request: {}", e)))?;
        if let Value::Object(fields) = &mut message {
            fields.insert("id".to_string(), Value::from(id));
        }

        writeln!(self.writer, "{}", message)
            .map_err(|e| PanelError::Channel(format!("Failed to write request: {}", e)))?;
        self.writer
            .flush()
            .map_err(|e| PanelError::Channel(format!("Failed to flush request: {}", e)))?;

        Ok(())
    }

    fn receive(&mut self, id: u64) -> PanelResult<Value> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| PanelError::Channel(format!("Failed to read response: {}", e)))?;
            if read == 0 {
                return Err(PanelError::Channel("host closed the connection".into()));
            }

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let envelope: ResultEnvelope = match serde_json::from_str(&line) {
                Ok(envelope) => envelope,
                Err(e) => {
                    log::warn!("ignoring unreadable host line: {}", e);
                    continue;
                }
            };

            if envelope.answers(id) {
                return envelope.into_result();
            }
            log::debug!("skipping host message {:?} while waiting for {}", envelope.id, id);
        }
    }
}

impl<R: BufRead, W: Write> HostChannel for JsonLinesChannel<R, W> {
    fn call(&mut self, request: &HostRequest) -> PanelResult<Value> {
        self.next_id += 1;
        let id = self.next_id;

        log::debug!("-> {} #{}", request.command(), id);
        self.send(id, request)?;
        let result = self.receive(id);
        match &result {
            Ok(_) => log::debug!("<- {} #{} ok", request.command(), id),
            Err(e) => log::warn!("<- {} #{} failed: {}", request.command(), id, e),
        }
        result
    }
}

/// Bridge process speaking JSON lines on stdin/stdout
pub struct ProcessChannel {
    child: Child,
    lines: JsonLinesChannel<BufReader<ChildStdout>, ChildStdin>,
}

impl ProcessChannel {
    /// Start `program args...` as the host bridge
    pub fn spawn(program: &str, args: &[String]) -> PanelResult<Self> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                PanelError::Channel(format!("Failed to start host bridge '{}': {}", program, e))
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| PanelError::Channel("host bridge has no stdin".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| PanelError::Channel("host bridge has no stdout".into()))?;

        log::info!("started host bridge '{}' (pid {})", program, child.id());

        Ok(Self {
            child,
            lines: JsonLinesChannel::new(BufReader::new(stdout), stdin),
        })
    }

    /// Start the bridge named by `host_command` in the settings
    pub fn from_settings(settings: &Settings) -> PanelResult<Self> {
        let (program, args) = settings.host_program()?;
        Self::spawn(program, args)
    }
}

impl HostChannel for ProcessChannel {
    fn call(&mut self, request: &HostRequest) -> PanelResult<Value> {
        self.lines.call(request)
    }
}

impl Drop for ProcessChannel {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn channel(input: &str) -> JsonLinesChannel<Cursor<Vec<u8>>, Vec<u8>> {
        JsonLinesChannel::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_request_line_carries_id() {
        let mut ch = channel(
            "{\"id\": 1, \"type\": \"result\", \"success\": true, \"result\": {\"accounts\": []}}\n",
        );
        let result = ch.call(&HostRequest::Accounts).unwrap();

        assert_eq!(result["accounts"], serde_json::json!([]));
        let sent: Value = serde_json::from_slice(ch.writer()).unwrap();
        assert_eq!(sent["id"], 1);
        assert_eq!(sent["type"], "ha_finance/accounts");
    }

    #[test]
    fn test_skips_other_ids_and_noise() {
        let mut ch = channel(concat!(
            "starting bridge\n",
            "\n",
            "{\"id\": 7, \"type\": \"result\", \"success\": true, \"result\": null}\n",
            "{\"id\": 1, \"type\": \"event\", \"event\": {}}\n",
            "{\"id\": 1, \"type\": \"result\", \"success\": false, \"error\": {\"code\": \"not_found\", \"message\": \"Account not found\"}}\n",
        ));
        let err = ch
            .call(&HostRequest::Account {
                account_id: "gone".into(),
            })
            .unwrap_err();

        assert!(err.is_remote());
        assert_eq!(err.to_string(), "Account not found");
    }

    #[test]
    fn test_eof_is_channel_error() {
        let mut ch = channel("");
        let err = ch.call(&HostRequest::Accounts).unwrap_err();
        assert!(matches!(err, PanelError::Channel(_)));
    }

    #[test]
    fn test_ids_increase_per_call() {
        let mut ch = channel(concat!(
            "{\"id\": 1, \"type\": \"result\", \"success\": true, \"result\": {}}\n",
            "{\"id\": 2, \"type\": \"result\", \"success\": true, \"result\": {}}\n",
        ));
        ch.call(&HostRequest::Accounts).unwrap();
        ch.call(&HostRequest::Accounts).unwrap();

        let sent = String::from_utf8(ch.writer().clone()).unwrap();
        let ids: Vec<u64> = sent
            .lines()
            .map(|l| serde_json::from_str::<Value>(l).unwrap()["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_bridge() {
        let script = r#"read line; echo '{"id": 1, "type": "result", "success": true, "result": {"accounts": [{"id": "cash", "name": "Cash", "balance": 5}]}}'"#;
        let mut ch = ProcessChannel::spawn("sh", &["-c".to_string(), script.to_string()]).unwrap();

        let result = ch.call(&HostRequest::Accounts).unwrap();
        assert_eq!(result["accounts"][0]["name"], "Cash");
    }

    #[test]
    fn test_missing_bridge_program() {
        let result = ProcessChannel::spawn("/nonexistent/ha-finance-bridge", &[]);
        assert!(matches!(result, Err(PanelError::Channel(_))));
    }
}
