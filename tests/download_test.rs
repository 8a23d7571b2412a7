//! Artifact delivery tests: streaming a converted file back under the
//! fixed attachment name, and 404 behavior for unknown or hostile names.

mod common;

use common::{STUB_VIDEO, TestHarness, convert_form};

#[tokio::test]
async fn converted_artifact_is_downloadable() {
    let (_harness, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let json: serde_json::Value = client
        .post(format!("http://{addr}/convert"))
        .multipart(convert_form("cover.png", "track.mp3"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let download_url = json["downloadUrl"].as_str().unwrap();

    let resp = client
        .get(format!("http://{addr}{download_url}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Fixed display name, whatever the internal filename is.
    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(
        disposition,
        "attachment; filename=\"video_generato.mp4\""
    );
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "video/mp4"
    );

    let body = resp.bytes().await.unwrap();
    assert_eq!(&body[..], STUB_VIDEO);
}

#[tokio::test]
async fn unknown_artifact_returns_404() {
    let (harness, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/download/does-not-exist.mp4"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "file not found");

    // Pure lookup, no side effects.
    assert_eq!(harness.upload_file_count(), 0);
    assert_eq!(harness.output_file_count(), 0);
}

#[tokio::test]
async fn traversal_download_names_are_rejected() {
    let (harness, addr) = TestHarness::with_server().await;

    // Plant a file outside the output area that a traversal name would hit:
    // the upload dir is a sibling of the output dir under the temp root.
    std::fs::write(harness.upload_dir.path().join("secret.mp4"), b"secret").unwrap();
    let upload_dir_name = harness
        .upload_dir
        .path()
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let resp = reqwest::get(format!(
        "http://{addr}/download/..%2F{upload_dir_name}%2Fsecret.mp4"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn download_urls_are_job_scoped() {
    let (_harness, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let first: serde_json::Value = client
        .post(format!("http://{addr}/convert"))
        .multipart(convert_form("a.png", "a.mp3"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = client
        .post(format!("http://{addr}/convert"))
        .multipart(convert_form("b.png", "b.mp3"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Each job's artifact resolves independently.
    for json in [&first, &second] {
        let url = json["downloadUrl"].as_str().unwrap();
        let resp = client
            .get(format!("http://{addr}{url}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }
}
