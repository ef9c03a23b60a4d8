//! HTTP 通知送信実装
//!
//! reqwest でカカオ通知 API に作成要求を POST する。本番環境で使用する。

use alimflow_domain::notification::{KakaoNotification, NotificationError};
use async_trait::async_trait;

use super::KakaoNotificationClient;

/// HTTP 通知送信
///
/// `reqwest::Client` をラップし、作成要求を JSON で
/// `{api_base_url}/v1/messages` に POST する。
pub struct HttpKakaoNotificationClient {
    client:       reqwest::Client,
    api_base_url: String,
    api_key:      String,
}

impl HttpKakaoNotificationClient {
    /// 新しい HTTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `api_base_url`: カカオ通知 API のベース URL（例: `http://localhost:8090`）
    /// - `api_key`: API キー（Bearer トークンとして送信される）
    pub fn new(api_base_url: &str, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl KakaoNotificationClient for HttpKakaoNotificationClient {
    async fn create(&self, notification: &KakaoNotification) -> Result<(), NotificationError> {
        let url = format!("{}/v1/messages", self.api_base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(notification)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("カカオ API への接続に失敗: {e}")))?;

        check_response(response).await
    }
}

/// レスポンスのステータスを検査する
///
/// 成功ステータス以外はエラー本文ごと [`NotificationError::Rejected`] に変換する。
async fn check_response(response: reqwest::Response) -> Result<(), NotificationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(NotificationError::Rejected {
        status:  status.as_u16(),
        message: body,
    })
}
