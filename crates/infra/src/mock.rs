//! # テスト用モッククライアント
//!
//! ユースケーステストで使用するインメモリのカカオ通知クライアント。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! alimflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use alimflow_domain::notification::{KakaoNotification, NotificationError};
use async_trait::async_trait;

use crate::notification::KakaoNotificationClient;

/// テスト用のモック KakaoNotificationClient
///
/// 受け取った作成要求を記録する。[`failing`](MockKakaoNotificationClient::failing)
/// で構築すると常に [`NotificationError::SendFailed`] を返し、
/// エラー伝播のテストに使用できる。
#[derive(Clone, Default)]
pub struct MockKakaoNotificationClient {
    created: Arc<Mutex<Vec<KakaoNotification>>>,
    failure: Option<String>,
}

impl MockKakaoNotificationClient {
    pub fn new() -> Self {
        Self {
            created: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// 常に送信失敗するモックを作成する
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            created: Arc::new(Mutex::new(Vec::new())),
            failure: Some(message.into()),
        }
    }

    /// これまでに受け取った作成要求を返す
    pub fn created(&self) -> Vec<KakaoNotification> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl KakaoNotificationClient for MockKakaoNotificationClient {
    async fn create(&self, notification: &KakaoNotification) -> Result<(), NotificationError> {
        if let Some(message) = &self.failure {
            return Err(NotificationError::SendFailed(message.clone()));
        }

        self.created.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
