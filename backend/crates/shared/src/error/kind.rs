//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to process exit codes.

use serde::Serialize;

/// エラー種別の列挙体
///
/// ページ挙動レイヤーで発生するエラーの分類を定義します。
/// 各バリアントは sysexits(3) に準拠した終了コードにマッピングされます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.exit_code(), 66);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 65 - Invalid Input: 入力データ（レイアウト・イベント）が不正
    InvalidInput,
    /// 66 - Not Found: 必要な要素・ファイルが見つからない
    NotFound,
    /// 70 - Internal: 内部エラー
    Internal,
    /// 74 - I/O: 入出力エラー
    Io,
    /// 78 - Invalid Config: 設定値が不正
    InvalidConfig,
}

impl ErrorKind {
    /// プロセス終了コードを取得
    ///
    /// ## Returns
    /// sysexits(3) に準拠した終了コード
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidInput.exit_code(), 65);
    /// assert_eq!(ErrorKind::InvalidConfig.exit_code(), 78);
    /// ```
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::InvalidInput => 65,
            ErrorKind::NotFound => 66,
            ErrorKind::Internal => 70,
            ErrorKind::Io => 74,
            ErrorKind::InvalidConfig => 78,
        }
    }

    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidInput.as_str(), "Invalid Input");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Internal => "Internal",
            ErrorKind::Io => "I/O",
            ErrorKind::InvalidConfig => "Invalid Config",
        }
    }

    /// 内部起因のエラーかどうかを判定
    ///
    /// `Internal` と `Io` は `true` を返します。
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_internal(&self) -> bool {
        matches!(self, ErrorKind::Internal | ErrorKind::Io)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
