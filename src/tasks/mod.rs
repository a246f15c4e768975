// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! currently the playlist request, from the main UI thread. It provides a
//! dedicated worker loop that translates [`AppTask`] requests into calls on a
//! [`CollectionSource`] and broadcasts the results back to the application
//! via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to by events.

mod handlers;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{api::CollectionSource, events::AppEvent};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadCollection { token: u64, collection_id: String },
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns the collection source and enters a blocking loop,
/// listening for incoming [`AppTask`]s until the task channel is closed.
///
/// # Arguments
///
/// * `source` - Where playlists are fetched from.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker<S>(source: S, task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>)
where
    S: CollectionSource + Send + 'static,
{
    thread::spawn(move || run_task_worker(&source, &task_rx, &event_tx));
}

fn run_task_worker(source: &dyn CollectionSource, task_rx: &Receiver<AppTask>, event_tx: &Sender<AppEvent>) {
    while let Ok(task) = task_rx.recv() {
        let ctx = TaskContext { source, event_tx };

        if let Err(e) = handle_task(task, &ctx) {
            log::error!("Task failed: {:#}", e);
            let _ = event_tx.send(AppEvent::Error(e.to_string()));
        }
    }
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    source: &'a dyn CollectionSource,
    event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadCollection {
            token,
            collection_id,
        } => handlers::load_collection(ctx, token, &collection_id),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::{api::LoadError, model::Item};

    struct FakeSource;

    impl CollectionSource for FakeSource {
        fn fetch(&self, collection_id: &str) -> Result<Vec<Item>, LoadError> {
            match collection_id {
                "PLgood" => Ok(vec![Item::new("1".into(), "One".into(), "v1".into())]),
                _ => Err(LoadError::Api {
                    code: 404,
                    message: "playlistNotFound".into(),
                }),
            }
        }
    }

    #[test]
    fn worker_reports_loaded_collection() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        task_tx
            .send(AppTask::LoadCollection {
                token: 7,
                collection_id: "PLgood".into(),
            })
            .unwrap();
        drop(task_tx);

        run_task_worker(&FakeSource, &task_rx, &event_tx);

        match event_rx.try_recv().unwrap() {
            AppEvent::CollectionLoaded { token, items } => {
                assert_eq!(token, 7);
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].media_id, "v1");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn worker_reports_load_failure() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        task_tx
            .send(AppTask::LoadCollection {
                token: 3,
                collection_id: "PLmissing".into(),
            })
            .unwrap();
        drop(task_tx);

        run_task_worker(&FakeSource, &task_rx, &event_tx);

        match event_rx.try_recv().unwrap() {
            AppEvent::CollectionLoadFailed { token, error } => {
                assert_eq!(token, 3);
                assert!(matches!(error, LoadError::Api { code: 404, .. }));
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert!(event_rx.try_recv().is_err());
    }
}
