// Background request worker
// Keeps blocking HTTP off the UI thread. Week fetches carry a
// monotonically increasing token; the app renders only responses whose
// token matches the latest issued, so a superseded fetch can finish late
// without clobbering newer data.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;

use super::{ApiClient, ApiError, TimeChange};
use crate::models::week::WeekData;

pub enum SyncEvent {
    WeekLoaded {
        token: u64,
        week_start: NaiveDate,
        result: Result<WeekData, ApiError>,
    },
    RescheduleDone {
        task_id: i64,
        start_time: String,
        result: Result<(), ApiError>,
    },
}

pub struct SyncWorker {
    client: Arc<ApiClient>,
    tx: Sender<SyncEvent>,
    rx: Receiver<SyncEvent>,
    next_token: u64,
}

impl SyncWorker {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = channel();
        Self {
            client: Arc::new(client),
            tx,
            rx,
            next_token: 0,
        }
    }

    /// Start a week fetch and return its token. The caller remembers the
    /// token and ignores any `WeekLoaded` carrying an older one; in-flight
    /// requests are never cancelled, only discarded on arrival.
    pub fn request_week(&mut self, week_start: NaiveDate) -> u64 {
        self.next_token += 1;
        let token = self.next_token;

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = client.fetch_week(week_start);
            // The app may have shut down; a closed channel is fine.
            let _ = tx.send(SyncEvent::WeekLoaded {
                token,
                week_start,
                result,
            });
        });

        token
    }

    pub fn request_reschedule(&self, task_id: i64, change: TimeChange) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = client.reschedule(task_id, &change);
            let _ = tx.send(SyncEvent::RescheduleDone {
                task_id,
                start_time: change.start_time,
                result,
            });
        });
    }

    /// Drain all completed requests without blocking. Called once per
    /// frame from the update loop.
    pub fn poll(&self) -> Vec<SyncEvent> {
        self.rx.try_iter().collect()
    }
}
