//! # カカオ通知
//!
//! カカオ通知 API に渡す作成要求とエラーを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`KakaoNotification`] | 通知作成要求 | 件名・本文・宛先・テンプレートコードを持つ payload |
//! | [`TemplateCode`] | テンプレートコード | カカオ側に事前登録されたメッセージテンプレートの識別子 |
//!
//! ## 設計方針
//!
//! - **メッセージ種別ごとに固定のテンプレートコード**: payload の他フィールドが
//!   何であれ、同じ種別の通知は同じコードを持つ
//! - **ワイヤ形式は camelCase**: カカオ通知 API と同じ JSON フィールド名で
//!   シリアライズされる

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// 送信処理に失敗（接続不可、タイムアウト等）
    #[error("カカオ通知の送信に失敗: {0}")]
    SendFailed(String),

    /// カカオ API がリクエストを拒否
    #[error("カカオ API がリクエストを拒否しました: status={status}, {message}")]
    Rejected {
        /// API が返した HTTP ステータスコード
        status:  u16,
        /// API が返したエラー本文
        message: String,
    },
}

/// テンプレートコード
///
/// カカオ側に事前登録されたメッセージテンプレートを識別する。
/// ワイヤ上ではコード文字列（例: `COD001`）としてシリアライズされる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
pub enum TemplateCode {
    /// 配達完了通知
    #[serde(rename = "COD001")]
    #[strum(serialize = "COD001")]
    DeliveryArrived,
}

/// 通知作成要求
///
/// 送信手段に渡される payload。呼び出しごとに新しく構築され、
/// 所有権ごと送信側に渡った後は変更されない。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KakaoNotification {
    /// 件名
    pub subject:       String,
    /// 本文
    pub content:       String,
    /// 宛先の携帯番号
    pub mobile:        String,
    /// テンプレートコード
    pub template_code: TemplateCode,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn template_codeの文字列変換が正しい() {
        // Display
        assert_eq!(TemplateCode::DeliveryArrived.to_string(), "COD001");

        // IntoStaticStr
        let code: &str = TemplateCode::DeliveryArrived.into();
        assert_eq!(code, "COD001");

        // FromStr
        assert_eq!(
            TemplateCode::from_str("COD001").unwrap(),
            TemplateCode::DeliveryArrived
        );
    }

    #[test]
    fn 通知作成要求はcamel_caseとコード文字列でシリアライズされる() {
        let notification = KakaoNotification {
            subject:       "치즈 물품이 도착했습니다.".to_string(),
            content:       "김영희 님이 보내주신 물품이 도착완료 했습니다.".to_string(),
            mobile:        "010-1234-5678".to_string(),
            template_code: TemplateCode::DeliveryArrived,
        };

        let value = serde_json::to_value(&notification).unwrap();

        assert_eq!(value["subject"], "치즈 물품이 도착했습니다.");
        assert_eq!(value["mobile"], "010-1234-5678");
        assert_eq!(value["templateCode"], "COD001");
    }
}
