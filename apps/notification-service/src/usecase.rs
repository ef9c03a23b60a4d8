//! # ユースケース層
//!
//! 配達イベントから通知を組み立てて送信するユースケースを定義する。
//!
//! ## モジュール構成
//!
//! - [`delivery`] - 配達完了通知の組み立てと送信

pub mod delivery;

pub use delivery::{DeliveryKakaoNotificationSender, DeliveryNotificationSender};
