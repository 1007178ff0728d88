use thiserror::Error;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::{Config, ConfigError};
use crate::dimension::Dimension;
use crate::error::QuantityError;
use crate::format::format_to_relevant_digits;
use crate::process::{self, HeatingInput, ProcessError};
use crate::quantity::Quantity;
use crate::registry::{Measurement, UnitRegistry};
use crate::units::Unit;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위/물리량 오류
    #[error("물리량 오류: {0}")]
    Quantity(#[from] QuantityError),
    /// 공정 계산 오류
    #[error("공정 계산 오류: {0}")]
    Process(#[from] ProcessError),
}

/// 파싱된 명령을 실행하고 결과를 표준 출력에 쓴다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let registry = UnitRegistry::standard();
    let digits = cli.digits.or(config.digits);

    match &cli.command {
        Command::Convert {
            dimension,
            value,
            from,
            to,
        } => {
            let source = registry.measure(*dimension, *value, from)?;
            let target_symbol = match to {
                Some(symbol) => symbol.as_str(),
                None => display_symbol(&registry, config, *dimension),
            };
            let converted = registry.convert_measurement(&source, target_symbol)?;
            info!(%dimension, from = %from, to = target_symbol, "단위 변환");
            println!(
                "{} = {}",
                show_measurement(&source, digits),
                show_measurement(&converted, digits)
            );
        }
        Command::Parse { dimension, text } => {
            let parsed = registry.parse(*dimension, text)?;
            let base = registry.convert_measurement(&parsed, registry.base_symbol(*dimension))?;
            println!("{}", show_measurement(&parsed, digits));
            println!("  기준 단위: {}", show_measurement(&base, digits));
            println!("  SI 저장값: {}", base.value);
        }
        Command::Units { dimension } => {
            let dimensions: Vec<Dimension> = match dimension {
                Some(d) => vec![*d],
                None => registry.dimensions().collect(),
            };
            for d in dimensions {
                let symbols: Vec<String> = registry
                    .units(d)
                    .iter()
                    .map(|u| {
                        if u.is_base {
                            format!("{} (기준)", u.symbol)
                        } else {
                            u.symbol.to_string()
                        }
                    })
                    .collect();
                println!("{d}: {}", symbols.join(", "));
            }
        }
        Command::Heat {
            flow,
            cp,
            inlet,
            outlet,
            steam,
        } => {
            let input = HeatingInput {
                mass_flow: *flow,
                specific_heat: *cp,
                inlet: *inlet,
                outlet: *outlet,
            };
            let result = process::heating_load(&input);
            println!(
                "열부하: {}",
                show(&result.heat_load.to_unit(config.display.power), digits)
            );
            println!("온도 상승: {}", show(&result.temperature_rise, digits));

            if let Some(pressure) = steam {
                let sat = process::saturated_steam(pressure)?;
                let condensate = process::condensate_rate(&result.heat_load, &sat)?;
                println!(
                    "포화 온도: {}",
                    show(&sat.temperature.to_unit(config.display.temperature), digits)
                );
                println!(
                    "증발 잠열: {}",
                    show(&sat.latent_heat.to_unit(config.display.specific_enthalpy), digits)
                );
                println!(
                    "응축수량: {}",
                    show(&condensate.to_unit(config.display.mass_flow), digits)
                );
            }
        }
    }
    Ok(())
}

/// 설정된 표시 단위. 설정에 없는 차원은 기준 단위.
fn display_symbol(registry: &UnitRegistry, config: &Config, dimension: Dimension) -> &'static str {
    config
        .display
        .symbol_for(dimension)
        .unwrap_or_else(|| registry.base_symbol(dimension))
}

// `{:.N}` 정밀도는 u16 범위를 넘으면 패닉하므로 자릿수 지정은 서식 함수로 직접 넘긴다.
fn show<U: Unit>(quantity: &Quantity<U>, digits: Option<usize>) -> String {
    match digits {
        Some(d) => quantity.to_engineering_format(d),
        None => quantity.to_string(),
    }
}

fn show_measurement(measurement: &Measurement, digits: Option<usize>) -> String {
    match digits {
        Some(d) => format!(
            "{} {}",
            format_to_relevant_digits(measurement.value, d),
            measurement.unit.symbol
        ),
        None => measurement.to_string(),
    }
}
