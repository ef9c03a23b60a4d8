//! Noop 通知送信実装
//!
//! 通知を実際に送信せず、ログ出力のみ行う。
//! テスト環境や通知無効化時に使用する。

use alimflow_domain::notification::{KakaoNotification, NotificationError};
use async_trait::async_trait;

use super::KakaoNotificationClient;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopKakaoNotificationClient;

#[async_trait]
impl KakaoNotificationClient for NoopKakaoNotificationClient {
    async fn create(&self, notification: &KakaoNotification) -> Result<(), NotificationError> {
        tracing::info!(
            mobile = %notification.mobile,
            template_code = %notification.template_code,
            "Noop: カカオ通知の送信をスキップ"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alimflow_domain::notification::TemplateCode;

    use super::*;

    #[tokio::test]
    async fn createがエラーを返さない() {
        let client = NoopKakaoNotificationClient;
        let notification = KakaoNotification {
            subject:       "테스트 물품이 도착했습니다.".to_string(),
            content:       "테스트 님이 보내주신 물품이 도착완료 했습니다.".to_string(),
            mobile:        "010-0000-0000".to_string(),
            template_code: TemplateCode::DeliveryArrived,
        };

        let result = client.create(&notification).await;
        assert!(result.is_ok());
    }
}
