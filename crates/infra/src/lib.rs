//! # AlimFlow インフラ層
//!
//! 外部システム（カカオ通知 API）との通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! ドメイン層が定義する payload を受け取り、外部プロバイダへの送信を実装する。
//! プロバイダの詳細（エンドポイント、認証）をこの層にカプセル化し、
//! ユースケース層は [`notification::KakaoNotificationClient`] trait だけに依存する。
//!
//! ## 依存関係
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。ドメイン層はインフラ層に依存しない。
//!
//! ## モジュール構成
//!
//! - [`notification`] - カカオ通知クライアント trait と実装
//! - `mock` - テスト用モッククライアント（`test-utils` feature）

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;
