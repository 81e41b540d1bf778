use core::fmt;
use std::path::PathBuf;

use unicode_wide_ranges_source::ExtractError;

/// ошибки подготовки таблицы
#[derive(Debug)]
pub enum PrepareError
{
    /// некорректные параметры командной строки
    Usage(String),
    Io(std::io::Error),
    /// не удалось загрузить файл UCD
    Download
    {
        url: String,
        error: ureq::Error,
    },
    /// файла нет в кеше, а загрузка запрещена
    Missing(PathBuf),
    /// некорректные данные UCD
    Extract(ExtractError),
}

impl fmt::Display for PrepareError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::Usage(message) => write!(f, "{}", message),
            Self::Io(error) => write!(f, "ошибка ввода-вывода: {}", error),
            Self::Download { url, error } => write!(f, "не удалось загрузить {}: {}", url, error),
            Self::Missing(path) => write!(
                f,
                "файл {} не найден, а загрузка отключена (--offline)",
                path.display()
            ),
            Self::Extract(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for PrepareError
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        match self {
            Self::Io(error) => Some(error),
            Self::Download { error, .. } => Some(error),
            Self::Extract(error) => Some(error),
            Self::Usage(_) | Self::Missing(_) => None,
        }
    }
}

impl From<std::io::Error> for PrepareError
{
    fn from(error: std::io::Error) -> Self
    {
        Self::Io(error)
    }
}

impl From<ExtractError> for PrepareError
{
    fn from(error: ExtractError) -> Self
    {
        Self::Extract(error)
    }
}
