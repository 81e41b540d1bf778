use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use unicode_wide_ranges_source::UcdFile;

use crate::tables::UcdSources;
use crate::{Config, PrepareError};

const UCD_URL: &str = "https://unicode.org/Public";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// адрес файла UCD нужной версии
pub fn url(version: &str, file: UcdFile) -> String
{
    format!("{}/{}/ucd/{}", UCD_URL, version, file.ucd_path())
}

/// путь к сохранённой копии файла UCD
pub fn cache_path(config: &Config, file: UcdFile) -> PathBuf
{
    config
        .data_dir
        .join(config.version.as_str())
        .join(file.ucd_path())
}

/// тексты файлов UCD: из кеша, а если их там нет - загружаем и сохраняем в кеш
pub fn load(config: &Config) -> Result<UcdSources, PrepareError>
{
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build()
        .into();

    Ok(UcdSources {
        east_asian_width: load_file(&agent, config, UcdFile::EastAsianWidth)?,
        emoji_data: load_file(&agent, config, UcdFile::EmojiData)?,
    })
}

fn load_file(agent: &ureq::Agent, config: &Config, file: UcdFile) -> Result<String, PrepareError>
{
    let path = cache_path(config, file);

    if path.is_file() {
        log::info!("{}: берём из кеша {}", file, path.display());

        return Ok(fs::read_to_string(&path)?);
    }

    if config.offline {
        return Err(PrepareError::Missing(path));
    }

    let url = url(config.version.as_str(), file);

    log::info!("{}: загружаем {}", file, url);

    let text = match download(agent, url.as_str()) {
        Ok(text) => text,
        Err(error) => return Err(PrepareError::Download { url, error }),
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    fs::write(&path, text.as_str())?;

    log::debug!("{}: сохранён в {}", file, path.display());

    Ok(text)
}

fn download(agent: &ureq::Agent, url: &str) -> Result<String, ureq::Error>
{
    agent.get(url).call()?.body_mut().read_to_string()
}
