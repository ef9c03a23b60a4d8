//! # 配達通知ハンドラ
//!
//! 配達完了イベントを受け取り、カカオ通知の送信を起動するエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! POST /internal/notifications/delivery
//! ```
//!
//! 成功時は 204 No Content を返す。送信失敗はビジネスイベントとして
//! 記録した上で 502 に変換される。

use std::sync::Arc;

use alimflow_domain::delivery::DeliveryMessage;
use alimflow_shared::{event_log::event, log_business_event};
use axum::{Json, extract::State, http::StatusCode};

use crate::{error::ServiceError, usecase::DeliveryNotificationSender};

/// 配達通知ハンドラーの State
pub struct NotificationState<S> {
    pub sender: S,
}

/// 配達完了イベントを通知として送信する
///
/// リクエストボディの検証は行わない。空のフィールドはそのまま
/// 整形後のメッセージに現れるか、プロバイダ側で失敗する。
pub async fn send_delivery_notification<S>(
    State(state): State<Arc<NotificationState<S>>>,
    Json(message): Json<DeliveryMessage>,
) -> Result<StatusCode, ServiceError>
where
    S: DeliveryNotificationSender,
{
    let recipient = message.receiver.mobile.clone();

    match state.sender.send(message).await {
        Ok(()) => {
            log_business_event!(
                event.category = event::category::NOTIFICATION,
                event.action = event::action::NOTIFICATION_SENT,
                event.entity_type = event::entity_type::KAKAO_NOTIFICATION,
                event.result = event::result::SUCCESS,
                notification.recipient = %recipient,
                "配達通知を送信しました"
            );
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            log_business_event!(
                event.category = event::category::NOTIFICATION,
                event.action = event::action::NOTIFICATION_FAILED,
                event.entity_type = event::entity_type::KAKAO_NOTIFICATION,
                event.result = event::result::FAILURE,
                notification.recipient = %recipient,
                error = %e,
                "配達通知の送信に失敗しました"
            );
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use alimflow_domain::delivery::{Delivery, Receiver, Sender};
    use alimflow_infra::mock::MockKakaoNotificationClient;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::usecase::DeliveryKakaoNotificationSender;

    fn make_state(
        client: &MockKakaoNotificationClient,
    ) -> Arc<NotificationState<DeliveryKakaoNotificationSender>> {
        Arc::new(NotificationState {
            sender: DeliveryKakaoNotificationSender::new(Arc::new(client.clone())),
        })
    }

    fn make_message() -> DeliveryMessage {
        DeliveryMessage {
            delivery: Delivery {
                item_name: "Box A".to_string(),
            },
            sender:   Sender {
                name: "Jane".to_string(),
            },
            receiver: Receiver {
                mobile: "010-1234-5678".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn 送信成功時に204を返す() {
        let client = MockKakaoNotificationClient::new();

        let result =
            send_delivery_notification(State(make_state(&client)), Json(make_message())).await;

        assert_eq!(result.unwrap(), StatusCode::NO_CONTENT);
        assert_eq!(client.created().len(), 1);
    }

    #[tokio::test]
    async fn 送信失敗時にエラーを返す() {
        let client = MockKakaoNotificationClient::failing("接続失敗");

        let result =
            send_delivery_notification(State(make_state(&client)), Json(make_message())).await;

        assert!(result.is_err());
    }
}
