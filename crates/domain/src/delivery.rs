//! # 配達イベント
//!
//! 「配達が完了した」ことを表すドメインイベントを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`DeliveryMessage`] | 配達完了イベント | 通知の契機となる入力。呼び出し側が構築し、一度だけ消費される |
//! | [`Delivery`] | 配達物 | 届いた品物の情報 |
//! | [`Sender`] | 送り主 | 品物を送った人 |
//! | [`Receiver`] | 受取人 | 通知の宛先（携帯番号） |

use serde::{Deserialize, Serialize};

/// 配達完了イベント
///
/// 呼び出し側から受け取る入力。変更されることはなく、通知の組み立てで
/// 一度だけ消費される。各フィールドは空でないことが期待されるが、
/// この層では検証しない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryMessage {
    /// 配達物の情報
    pub delivery: Delivery,
    /// 送り主の情報
    pub sender:   Sender,
    /// 受取人の情報
    pub receiver: Receiver,
}

/// 配達物
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// 品名
    pub item_name: String,
}

/// 送り主
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    /// 氏名
    pub name: String,
}

/// 受取人
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receiver {
    /// 携帯番号
    pub mobile: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn 配達イベントをcamel_caseのjsonからデシリアライズできる() {
        let json = r#"{
            "delivery": { "itemName": "Box A" },
            "sender": { "name": "Jane" },
            "receiver": { "mobile": "010-1234-5678" }
        }"#;

        let message: DeliveryMessage = serde_json::from_str(json).unwrap();

        assert_eq!(message.delivery.item_name, "Box A");
        assert_eq!(message.sender.name, "Jane");
        assert_eq!(message.receiver.mobile, "010-1234-5678");
    }
}
