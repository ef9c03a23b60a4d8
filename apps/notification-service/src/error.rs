//! # Notification Service エラー定義
//!
//! サービス固有のエラーと、HTTP レスポンスへの変換を定義する。

use alimflow_domain::notification::NotificationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// エラーレスポンス（RFC 7807 Problem Details）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

/// Notification Service で発生するエラー
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 通知プロバイダへの送信失敗
    #[error("通知送信エラー: {0}")]
    Notification(#[from] NotificationError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, error_type, title, detail) = match &self {
            ServiceError::Notification(e) => {
                tracing::error!("通知プロバイダとの通信に失敗: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "https://alimflow.example.com/errors/notification-failed",
                    "Bad Gateway",
                    "通知の送信に失敗しました".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error_type: error_type.to_string(),
                title: title.to_string(),
                status: status.as_u16(),
                detail,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn 通知エラーは502に変換される() {
        let error =
            ServiceError::Notification(NotificationError::SendFailed("接続失敗".to_string()));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
