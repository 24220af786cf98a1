//! Configuration Module
//!
//! # Interview Q&A
//!
//! Q: 환경변수 vs 설정 파일, 어떤 방식을 선택했는가?
//! A: 환경변수 (`.env` 파일은 dotenvy로 선택적 로드)
//!    - 바인드 주소, 포트, DB 파일 위치 모두 배포 환경마다 다름
//!
//! Q: 설정 검증은 어떻게 하는가?
//! A: from_env()에서 모든 값을 파싱 → 잘못된 값이면 즉시 실패 (fail-fast)

use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{bail, Context, Result};

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 바인드 주소 (기본값: 0.0.0.0, 모든 인터페이스)
    pub host: IpAddr,

    /// 서버 포트 (기본값: 5000)
    pub port: u16,

    /// SQLite 연결 문자열
    /// 형식: sqlite://path/to/file.db
    pub database_url: String,

    /// 커넥션 풀 최대 크기
    pub max_connections: u32,

    /// 500 응답 본문에 저장소 에러 메시지를 포함할지 여부
    pub expose_error_details: bool,

    /// 환경 (development, staging, production)
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Config {
    /// 환경변수에서 설정 로드
    ///
    /// # Optional Environment Variables
    ///
    /// - `HOST`: 바인드 주소 (기본값: 0.0.0.0)
    /// - `PORT`: 서버 포트 (기본값: 5000)
    /// - `DATABASE_URL`: SQLite 파일 (기본값: sqlite://typing_results.db)
    /// - `DB_MAX_CONNECTIONS`: 풀 크기 (기본값: 5)
    /// - `ENVIRONMENT`: development | staging | production
    /// - `EXPOSE_ERROR_DETAILS`: true | false (production 기본값은 false)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 key lookup으로 설정 파싱 (테스트에서 프로세스 환경을 건드리지 않기 위함)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENVIRONMENT")
            .unwrap_or_else(|| "development".to_string())
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        let host = lookup("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse()
            .context("HOST must be a valid IP address")?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let max_connections: u32 = lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;
        if max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        let expose_error_details = match lookup("EXPOSE_ERROR_DETAILS") {
            Some(raw) => parse_bool(&raw).context("EXPOSE_ERROR_DETAILS must be true or false")?,
            None => environment != Environment::Production,
        };

        Ok(Config {
            host,
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://typing_results.db".to_string()),
            max_connections,
            expose_error_details,
            environment,
        })
    }

    /// 프로덕션 환경인지 확인
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised boolean '{other}'"),
    }
}
