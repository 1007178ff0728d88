//! 명령행 인자 정의.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::dimension::Dimension;
use crate::units::{MassFlow, Pressure, SpecificHeat, Temperature};

#[derive(Parser, Debug)]
#[command(name = "process_units")]
#[command(version, about = "공정 물리량 단위 변환 도구", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로 (기본: ./process_units.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 표시 유효 자릿수. 설정 파일 값보다 우선한다.
    #[arg(long, global = true)]
    pub digits: Option<usize>,

    /// 로그 상세도 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 값을 다른 단위로 변환한다. 대상 단위를 생략하면 설정의 표시 단위를 쓴다.
    #[command(allow_negative_numbers = true)]
    Convert {
        #[arg(value_parser = parse_dimension)]
        dimension: Dimension,
        value: f64,
        from: String,
        to: Option<String>,
    },
    /// `"20 °C"`, `"20[°C]"` 형식의 문자열을 해석한다.
    Parse {
        #[arg(value_parser = parse_dimension)]
        dimension: Dimension,
        text: String,
    },
    /// 등록된 단위 목록을 출력한다.
    Units {
        #[arg(value_parser = parse_dimension)]
        dimension: Option<Dimension>,
    },
    /// 연속 가열 공정 열수지 (Q = ṁ·cp·ΔT)
    Heat {
        /// 질량 유량, 예: "3.6 t/h"
        #[arg(long)]
        flow: MassFlow,
        /// 비열, 예: "4.18 kJ/(kg·K)"
        #[arg(long)]
        cp: SpecificHeat,
        /// 입구 온도
        #[arg(long)]
        inlet: Temperature,
        /// 출구 온도
        #[arg(long)]
        outlet: Temperature,
        /// 가열 증기 절대압력. 지정하면 응축수량도 계산한다.
        #[arg(long)]
        steam: Option<Pressure>,
    },
}

fn parse_dimension(text: &str) -> Result<Dimension, String> {
    Dimension::from_name(text).ok_or_else(|| {
        let names: Vec<&str> = Dimension::ALL.iter().map(|d| d.name()).collect();
        format!("알 수 없는 차원 '{text}' (가능: {})", names.join(", "))
    })
}
