use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pharmgen_generate::builders::BuildContext;
use pharmgen_generate::dataset::{DatasetCounts, assemble_dataset};

#[derive(Clone, Default)]
struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("lock log buffer");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "failed to lock log buffer"))?;
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn progress_is_logged_every_n_records_per_type() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let counts = DatasetCounts {
        commercial: 5,
        compounding: 4,
        progress_every: 2,
    };
    let records = tracing::subscriber::with_default(subscriber, || {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assemble_dataset(counts, &BuildContext::new(Utc::now()), &mut rng)
    });
    assert_eq!(records.len(), 9);

    let output = logs.contents();
    let progress: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("records generated"))
        .collect();
    assert_eq!(progress.len(), 4, "{output}");
    assert_eq!(
        progress.iter().filter(|line| line.contains("commercial")).count(),
        2
    );
    assert_eq!(
        progress.iter().filter(|line| line.contains("compounding")).count(),
        2
    );
    assert!(progress.iter().all(|line| line.contains("generated=2") || line.contains("generated=4")));
    assert!(!output.contains("generated=5"));
    assert!(output.contains("dataset shuffled"));
}
