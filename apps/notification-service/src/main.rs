//! # Notification Service サーバー
//!
//! 配達完了イベントを受け取り、カカオ通知 API 経由で受取人に通知する内部サービス。
//!
//! ## 役割
//!
//! - **通知の組み立て**: 配達イベントから件名・本文・テンプレートコードを導出
//! - **送信の委譲**: カカオ通知クライアントへの作成要求の転送
//!
//! リトライ・スケジューリング・送信ログの永続化は行わない。送信失敗は
//! そのまま呼び出し元に返す。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `NOTIFY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `NOTIFY_PORT` | **Yes** | ポート番号 |
//! | `NOTIFICATION_BACKEND` | No | `kakao` \| `noop`（デフォルト: `noop`） |
//! | `KAKAO_API_BASE_URL` | No | カカオ通知 API のベース URL |
//! | `KAKAO_API_KEY` | No | カカオ通知 API の API キー |
//! | `LOG_FORMAT` | No | `json` \| `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（送信は noop）
//! NOTIFY_PORT=3002 cargo run -p alimflow-notification-service
//!
//! # 本番環境
//! NOTIFY_PORT=3002 NOTIFICATION_BACKEND=kakao KAKAO_API_KEY=... \
//!     cargo run -p alimflow-notification-service --release
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use alimflow_infra::notification::{
    HttpKakaoNotificationClient,
    KakaoNotificationClient,
    NoopKakaoNotificationClient,
};
use alimflow_shared::observability::{self, TracingConfig};
use axum::{
    Router,
    routing::{get, post},
};
use config::{KakaoConfig, ServiceConfig};
use handler::{NotificationState, health_check, send_delivery_notification};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use usecase::DeliveryKakaoNotificationSender;

/// Notification Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    observability::init_tracing(&TracingConfig::from_env("notification-service"));

    // 設定読み込み
    let config = ServiceConfig::from_env();

    tracing::info!(
        "Notification Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // 依存コンポーネントを初期化
    let client = build_kakao_client(&config.kakao);
    let sender = DeliveryKakaoNotificationSender::new(client);
    let state = Arc::new(NotificationState { sender });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .route(
            "/internal/notifications/delivery",
            post(send_delivery_notification::<DeliveryKakaoNotificationSender>),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Notification Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// 設定に応じたカカオ通知クライアントを構築する
///
/// 未知のバックエンド名は警告を出して noop にフォールバックする。
fn build_kakao_client(config: &KakaoConfig) -> Arc<dyn KakaoNotificationClient> {
    match config.backend.as_str() {
        "kakao" => Arc::new(HttpKakaoNotificationClient::new(
            &config.api_base_url,
            config.api_key.clone(),
        )),
        "noop" => Arc::new(NoopKakaoNotificationClient),
        other => {
            tracing::warn!(
                "不明な NOTIFICATION_BACKEND: {}（noop にフォールバック）",
                other
            );
            Arc::new(NoopKakaoNotificationClient)
        }
    }
}
