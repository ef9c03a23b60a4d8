//! # 配達完了通知
//!
//! 配達完了イベントからカカオ通知の作成要求を組み立て、送信を委譲する。
//!
//! ## 設計方針
//!
//! - **ステートレスな変換**: イベントから件名・本文をフィールド置換で導出するだけで、
//!   状態を持たない
//! - **依存性注入**: 送信手段は [`KakaoNotificationClient`] trait で抽象化し、
//!   コンストラクタで受け取る
//! - **エラーは伝播**: 送信失敗はこの層では処理せず、そのまま呼び出し元に返す。
//!   リトライもフォールバックも行わない

use std::sync::Arc;

use alimflow_domain::{
    delivery::DeliveryMessage,
    notification::{KakaoNotification, NotificationError, TemplateCode},
};
use alimflow_infra::notification::KakaoNotificationClient;
use async_trait::async_trait;

/// 配達通知の送信インターフェース
///
/// 配達完了イベントを受け取り、何らかの手段で受取人に通知する。
#[async_trait]
pub trait DeliveryNotificationSender: Send + Sync {
    /// 配達完了イベントを通知として送信する
    async fn send(&self, message: DeliveryMessage) -> Result<(), NotificationError>;
}

/// カカオ通知による配達通知送信
///
/// イベントから作成要求を組み立て、注入された [`KakaoNotificationClient`] に
/// 送信を委譲する。入力の検証は行わない。不正な値はそのまま整形後の
/// 文字列に現れるか、送信側で失敗する。
pub struct DeliveryKakaoNotificationSender {
    client: Arc<dyn KakaoNotificationClient>,
}

impl DeliveryKakaoNotificationSender {
    pub fn new(client: Arc<dyn KakaoNotificationClient>) -> Self {
        Self { client }
    }

    /// イベントから通知作成要求を組み立てる
    ///
    /// 携帯番号はそのままコピーし、テンプレートコードは配達完了用の
    /// 固定値を設定する。
    fn build_notification(message: &DeliveryMessage) -> KakaoNotification {
        KakaoNotification {
            subject:       Self::write_subject(message),
            content:       Self::write_content(message),
            mobile:        message.receiver.mobile.clone(),
            template_code: TemplateCode::DeliveryArrived,
        }
    }

    fn write_subject(message: &DeliveryMessage) -> String {
        format!("{} 물품이 도착했습니다.", message.delivery.item_name)
    }

    fn write_content(message: &DeliveryMessage) -> String {
        format!("{} 님이 보내주신 물품이 도착완료 했습니다.", message.sender.name)
    }
}

#[async_trait]
impl DeliveryNotificationSender for DeliveryKakaoNotificationSender {
    async fn send(&self, message: DeliveryMessage) -> Result<(), NotificationError> {
        self.client
            .create(&Self::build_notification(&message))
            .await
    }
}

#[cfg(test)]
mod tests {
    use alimflow_domain::delivery::{Delivery, Receiver, Sender};
    use alimflow_infra::mock::MockKakaoNotificationClient;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn make_message(item_name: &str, sender_name: &str, mobile: &str) -> DeliveryMessage {
        DeliveryMessage {
            delivery: Delivery {
                item_name: item_name.to_string(),
            },
            sender:   Sender {
                name: sender_name.to_string(),
            },
            receiver: Receiver {
                mobile: mobile.to_string(),
            },
        }
    }

    fn make_sender(client: &MockKakaoNotificationClient) -> DeliveryKakaoNotificationSender {
        DeliveryKakaoNotificationSender::new(Arc::new(client.clone()))
    }

    #[tokio::test]
    async fn 受取人の携帯番号がそのまま引き継がれる() {
        let client = MockKakaoNotificationClient::new();
        let sender = make_sender(&client);

        sender
            .send(make_message("Box A", "Jane", "010-1234-5678"))
            .await
            .unwrap();

        let created = client.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].mobile, "010-1234-5678");
    }

    #[tokio::test]
    async fn テンプレートコードは常に配達完了用の固定値になる() {
        let client = MockKakaoNotificationClient::new();
        let sender = make_sender(&client);

        sender
            .send(make_message("치즈", "김영희", "010-9876-5432"))
            .await
            .unwrap();

        let created = client.created();
        assert_eq!(created[0].template_code, TemplateCode::DeliveryArrived);
        assert_eq!(created[0].template_code.to_string(), "COD001");
    }

    #[rstest]
    #[case("Box A", "Jane")]
    #[case("치즈 선물세트", "김영희")]
    #[case("書籍", "田中太郎")]
    #[tokio::test]
    async fn 件名に品名が本文に送り主名が含まれる(
        #[case] item_name: &str,
        #[case] sender_name: &str,
    ) {
        let client = MockKakaoNotificationClient::new();
        let sender = make_sender(&client);

        sender
            .send(make_message(item_name, sender_name, "010-1234-5678"))
            .await
            .unwrap();

        let created = client.created();
        assert!(created[0].subject.contains(item_name));
        assert!(created[0].content.contains(sender_name));
    }

    #[tokio::test]
    async fn クライアントのエラーがそのまま呼び出し元に伝播する() {
        let client = MockKakaoNotificationClient::failing("接続失敗");
        let sender = make_sender(&client);

        let err = sender
            .send(make_message("Box A", "Jane", "010-1234-5678"))
            .await
            .unwrap_err();

        assert!(matches!(err, NotificationError::SendFailed(message) if message == "接続失敗"));
        assert!(client.created().is_empty());
    }
}
