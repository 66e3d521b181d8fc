use crate::utils::error::Result;

/// 讀寫結果檔、報告與匯出包的存儲介面
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// `path` 的顯示位置，用於日誌與 CLI 輸出
    fn location(&self, path: &str) -> String;
}
