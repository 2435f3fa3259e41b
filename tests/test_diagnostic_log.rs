//! The log-only path must emit the validated submission as a structured field.

use sealcoat_contact::{ContactService, ContactServiceImpl, Delivery, Metrics};
use serde_json::{json, Value};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(self.0.clone())
    }
}

impl SharedBuffer {
    fn lines(&self) -> Vec<Value> {
        let bytes = self.0.lock().expect("lock").clone();
        String::from_utf8(bytes)
            .expect("utf8 log output")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json log line"))
            .collect()
    }
}

#[tokio::test]
async fn test_unforwarded_submission_logged_with_default_source() {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .json()
        .with_max_level(Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let payload = json!({
        "orgName": "First Church",
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "416-555-0100",
        "city": "Toronto",
        "message": "Please contact me about a quote for our lot.",
        "utm": "dropped before logging"
    });
    let service = ContactServiceImpl::new(None, Metrics::new());
    let delivery = service
        .submit(&serde_json::to_vec(&payload).unwrap())
        .await
        .unwrap();
    assert!(matches!(delivery, Delivery::Logged(_)));

    let records: Vec<Value> = sink
        .lines()
        .into_iter()
        .filter(|line| line["fields"].get("submission").is_some())
        .collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["level"], "INFO");

    let logged: Value = serde_json::from_str(
        records[0]["fields"]["submission"]
            .as_str()
            .expect("submission recorded as a string"),
    )
    .expect("submission field holds JSON");
    assert_eq!(
        logged,
        json!({
            "orgName": "First Church",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "416-555-0100",
            "city": "Toronto",
            "message": "Please contact me about a quote for our lot.",
            "source": "website"
        })
    );
}
