//! # Notification Service 設定
//!
//! 環境変数から Notification Service サーバーの設定を読み込む。

use std::env;

/// Notification Service サーバーの設定
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// バインドアドレス
    pub host:  String,
    /// ポート番号
    pub port:  u16,
    /// カカオ通知の設定
    pub kakao: KakaoConfig,
}

/// カカオ通知の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `kakao`: カカオ通知 API 経由で送信（本番）
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct KakaoConfig {
    /// 送信バックエンド（"kakao" | "noop"）
    pub backend:      String,
    /// カカオ通知 API のベース URL（backend=kakao の場合に使用）
    pub api_base_url: String,
    /// カカオ通知 API の API キー（backend=kakao の場合に使用）
    pub api_key:      String,
}

impl ServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            host: env::var("NOTIFY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("NOTIFY_PORT")
                .expect("NOTIFY_PORT が設定されていません")
                .parse()
                .expect("NOTIFY_PORT は有効なポート番号である必要があります"),
            kakao: KakaoConfig::from_env(),
        }
    }
}

impl KakaoConfig {
    /// 環境変数からカカオ通知設定を読み込む
    fn from_env() -> Self {
        Self {
            backend:      env::var("NOTIFICATION_BACKEND").unwrap_or_else(|_| "noop".to_string()),
            api_base_url: env::var("KAKAO_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8090".to_string()),
            api_key:      env::var("KAKAO_API_KEY").unwrap_or_default(),
        }
    }
}
