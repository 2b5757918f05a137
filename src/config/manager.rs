//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    TranslationSettings,
    loader,
};

/// 設定管理を行う
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: TranslationSettings,

    /// ワークスペースのルートパス
    workspace_root: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成（カレントディレクトリをルートとする）
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: TranslationSettings::default(), workspace_root: PathBuf::from(".") }
    }

    /// 設定を読み込む
    ///
    /// 設定ファイルがなければデフォルト値を使う
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: PathBuf) -> Result<(), ConfigError> {
        tracing::debug!(workspace_root = %workspace_root.display(), "Loading settings");

        let settings =
            loader::load_from_workspace(&workspace_root)?.unwrap_or_else(TranslationSettings::default);

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!(settings = ?self.current_settings, "Settings loaded successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn settings(&self) -> &TranslationSettings {
        &self.current_settings
    }

    /// ワークスペースルートを取得
    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// ロケールごとのディレクトリを含む翻訳ディレクトリ
    #[must_use]
    pub fn translations_root(&self) -> PathBuf {
        self.workspace_root.join(&self.current_settings.translations_dir)
    }

    /// 指定ロケールのリソースドキュメントのパス
    #[must_use]
    pub fn document_path(&self, locale: &str) -> PathBuf {
        self.translations_root().join(locale).join(&self.current_settings.file_name)
    }

    /// ソースロケールのリソースドキュメントのパス
    #[must_use]
    pub fn source_document_path(&self) -> PathBuf {
        self.document_path(&self.current_settings.source_locale)
    }
}
