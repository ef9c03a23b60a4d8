//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、この親モジュールで re-export する
//! - ハンドラは薄く保ち、通知の組み立てはユースケース層に委譲する

pub mod delivery;
pub mod health;

pub use delivery::{NotificationState, send_delivery_notification};
pub use health::health_check;
