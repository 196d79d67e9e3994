//! End-to-end dispatch tests over a real temporary tree.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

use remux_core::testing::MockTranscoder;
use remux_core::{DispatchConfig, Dispatcher, InputSelection, NamingRule};

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap();
    path
}

/// Builds a small tree: a.mkv, b.mkv, sub/c.mkv plus non-matching noise.
fn reference_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "a.mkv");
    touch(tmp.path(), "b.mkv");
    touch(tmp.path(), "notes.txt");
    std::fs::create_dir(tmp.path().join("sub")).unwrap();
    touch(&tmp.path().join("sub"), "c.mkv");
    tmp
}

fn dispatcher(workers: usize, transcoder: MockTranscoder) -> Dispatcher<MockTranscoder> {
    Dispatcher::new(
        DispatchConfig::default().with_workers(workers),
        NamingRule::default(),
        transcoder,
    )
}

#[tokio::test]
async fn test_non_recursive_converts_direct_children_only() {
    let tmp = reference_tree();
    let transcoder = MockTranscoder::new();
    let handle = transcoder.handle();

    let summary = dispatcher(2, transcoder)
        .run(InputSelection::directory(tmp.path(), false))
        .await
        .unwrap();

    assert_eq!(summary.jobs_dispatched, 2);

    let mut inputs: Vec<_> = handle
        .recorded()
        .await
        .into_iter()
        .map(|r| r.input)
        .collect();
    inputs.sort();
    assert_eq!(
        inputs,
        vec![tmp.path().join("a.mkv"), tmp.path().join("b.mkv")]
    );

    // Direct children converted and removed, the nested file untouched.
    assert!(!tmp.path().join("a.mkv").exists());
    assert!(!tmp.path().join("b.mkv").exists());
    assert!(tmp.path().join("sub/c.mkv").exists());
    assert!(tmp.path().join("notes.txt").exists());
}

#[tokio::test]
async fn test_recursive_converts_every_depth_exactly_once() {
    let tmp = reference_tree();
    let transcoder = MockTranscoder::new();
    let handle = transcoder.handle();

    let summary = dispatcher(2, transcoder)
        .run(InputSelection::directory(tmp.path(), true))
        .await
        .unwrap();

    assert_eq!(summary.jobs_dispatched, 3);

    let mut inputs: Vec<_> = handle
        .recorded()
        .await
        .into_iter()
        .map(|r| r.input)
        .collect();
    inputs.sort();
    assert_eq!(
        inputs,
        vec![
            tmp.path().join("a.mkv"),
            tmp.path().join("b.mkv"),
            tmp.path().join("sub/c.mkv"),
        ]
    );
    assert!(!tmp.path().join("sub/c.mkv").exists());
}

#[tokio::test]
async fn test_output_paths_follow_the_naming_rule() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "feature.mkv");

    let transcoder = MockTranscoder::new();
    let handle = transcoder.handle();

    dispatcher(1, transcoder)
        .run(InputSelection::directory(tmp.path(), false))
        .await
        .unwrap();

    let recorded = handle.recorded().await;
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].output, tmp.path().join("feature.mp4"));
}

#[tokio::test]
async fn test_failed_transcode_retains_source_and_pool_keeps_going() {
    let tmp = TempDir::new().unwrap();
    let keep = touch(tmp.path(), "broken.mkv");
    let gone: Vec<_> = (0..5)
        .map(|i| touch(tmp.path(), &format!("ok{i}.mkv")))
        .collect();

    let transcoder = MockTranscoder::new();
    transcoder.fail_on(&keep).await;
    transcoder.set_delay(Duration::from_millis(5)).await;
    let handle = transcoder.handle();

    let summary = dispatcher(3, transcoder)
        .run(InputSelection::directory(tmp.path(), false))
        .await
        .unwrap();

    assert_eq!(summary.jobs_dispatched, 6);
    assert_eq!(handle.recorded().await.len(), 6);
    assert!(keep.exists());
    assert!(gone.iter().all(|p| !p.exists()));
}

#[tokio::test]
async fn test_single_file_mode_converts_exactly_one() {
    let tmp = TempDir::new().unwrap();
    let input = touch(tmp.path(), "one.mkv");
    touch(tmp.path(), "another.mkv");

    let transcoder = MockTranscoder::new();
    let handle = transcoder.handle();

    let summary = dispatcher(2, transcoder)
        .run(InputSelection::file(&input))
        .await
        .unwrap();

    assert_eq!(summary.jobs_dispatched, 1);
    assert_eq!(handle.recorded().await.len(), 1);
    assert!(!input.exists());
    assert!(tmp.path().join("another.mkv").exists());
}

#[tokio::test]
async fn test_slow_worker_converts_every_dispatched_job() {
    // A single slow worker means the scanner finishes emitting well before
    // the pool catches up, so the final job is still buffered in the queue
    // when the shutdown signal goes out. Repeat to cover both orders the
    // worker can observe the signal and the queue in.
    for _ in 0..25 {
        let tmp = TempDir::new().unwrap();
        let a = touch(tmp.path(), "a.mkv");
        let b = touch(tmp.path(), "b.mkv");

        let transcoder = MockTranscoder::new();
        transcoder.set_delay(Duration::from_millis(10)).await;
        let handle = transcoder.handle();

        let summary = dispatcher(1, transcoder)
            .run(InputSelection::directory(tmp.path(), false))
            .await
            .unwrap();

        assert_eq!(summary.jobs_dispatched, 2);
        assert_eq!(handle.recorded().await.len(), summary.jobs_dispatched);
        assert!(!a.exists());
        assert!(!b.exists());
    }
}

#[tokio::test]
async fn test_handshake_completes_for_every_pool_size() {
    for workers in [1usize, 2, 4, 8] {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "x.mkv");

        let transcoder = MockTranscoder::new();
        let summary = dispatcher(workers, transcoder)
            .run(InputSelection::directory(tmp.path(), false))
            .await
            .unwrap();

        // run() only returns once every worker has acknowledged shutdown.
        assert_eq!(summary.workers, workers);
    }
}
