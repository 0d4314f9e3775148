//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that classifies every failure of the
//! forwarding pipeline.

use serde::Serialize;

/// エラー種別の列挙体
///
/// 転送パイプラインの失敗分類を定義します。
/// 上流互換の応答契約により、全ての種別は HTTP 400 に収束します。
/// 種別の区別はログとライブラリ利用者に対してのみ保持されます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Unreachable;
/// assert_eq!(kind.status_code(), 400);
/// assert_eq!(kind.as_str(), "Unreachable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 必須パラメータの欠落や不正なメソッド（ネットワークには到達しない）
    Validation,
    /// トークン取得フェーズのタイムアウト
    Unreachable,
    /// コネクションレベルの失敗（どちらのフェーズでも発生し得る）
    Transport,
    /// バックエンドが POST を拒否した（ステータスが 200 以外）
    Backend,
    /// バックエンド応答の JSON が不正
    Decode,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// 全ての失敗は境界で 400 Bad Request として報告されます。
    /// この挙動は上流システムの応答契約をそのまま維持したものです。
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Validation.status_code(), 400);
    /// assert_eq!(ErrorKind::Backend.status_code(), 400);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        400
    }

    /// ログ・テスト向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Transport.as_str(), "Transport");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::Unreachable => "Unreachable",
            ErrorKind::Transport => "Transport",
            ErrorKind::Backend => "Backend",
            ErrorKind::Decode => "Decode",
        }
    }

    /// ネットワーク上で発生した失敗かどうかを判定
    ///
    /// `Validation` のみが `false` を返します。
    /// バリデーション失敗はバックエンド呼び出しの前に確定します。
    #[inline]
    pub const fn reached_network(&self) -> bool {
        !matches!(self, ErrorKind::Validation)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
