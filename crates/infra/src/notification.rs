//! # カカオ通知送信
//!
//! カカオ通知 API への作成要求の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`KakaoNotificationClient`] trait で送信を抽象化
//! - **2 つの実装**: HTTP（本番用）、Noop（テスト・通知無効化用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択

mod http;
mod noop;

use alimflow_domain::notification::{KakaoNotification, NotificationError};
use async_trait::async_trait;
pub use self::{http::HttpKakaoNotificationClient, noop::NoopKakaoNotificationClient};

/// カカオ通知クライアント trait
///
/// 通知基盤の中核。通知送信の具体的な方法を抽象化する。
/// HTTP / Noop の 2 実装を環境変数で切り替える。
#[async_trait]
pub trait KakaoNotificationClient: Send + Sync {
    /// 通知作成要求をカカオ通知 API に登録する
    async fn create(&self, notification: &KakaoNotification) -> Result<(), NotificationError>;
}
