use anyhow::Result;
use batcuc_engine::context::{AgeBracket, UsageDuration, UserContext};
use batcuc_engine::{
    analyze_compatibility, analyze_phone, analyze_six_digit, PhoneAnalysis, Purpose,
    SixDigitAnalysis,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "batcuc")]
#[command(about = "Bát Cục Linh Số - phone and identity number analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a phone number
    Phone {
        /// The phone number, formatting characters are ignored
        number: String,

        /// Age bracket of the owner
        #[arg(long, value_enum)]
        age: Option<AgeArg>,

        /// How long the number has been in use
        #[arg(long, value_enum)]
        usage: Option<UsageArg>,
    },

    /// Analyze the last six digits of an identity number
    SixDigit {
        /// The identity number, at least six digits
        number: String,
    },

    /// Score a phone number against a usage purpose
    Compat {
        /// The phone number
        number: String,

        /// What the number will be used for
        #[arg(long, value_enum, default_value = "general")]
        purpose: PurposeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AgeArg {
    Under25,
    Age25To40,
    Age40To60,
    Over60,
}

impl From<AgeArg> for AgeBracket {
    fn from(arg: AgeArg) -> Self {
        match arg {
            AgeArg::Under25 => AgeBracket::Under25,
            AgeArg::Age25To40 => AgeBracket::Age25To40,
            AgeArg::Age40To60 => AgeBracket::Age40To60,
            AgeArg::Over60 => AgeBracket::Over60,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UsageArg {
    Under1,
    From1To5,
    Over5,
}

impl From<UsageArg> for UsageDuration {
    fn from(arg: UsageArg) -> Self {
        match arg {
            UsageArg::Under1 => UsageDuration::Under1Year,
            UsageArg::From1To5 => UsageDuration::From1To5Years,
            UsageArg::Over5 => UsageDuration::Over5Years,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PurposeArg {
    Business,
    Romance,
    Wealth,
    Health,
    General,
}

impl From<PurposeArg> for Purpose {
    fn from(arg: PurposeArg) -> Self {
        match arg {
            PurposeArg::Business => Purpose::Business,
            PurposeArg::Romance => Purpose::Romance,
            PurposeArg::Wealth => Purpose::Wealth,
            PurposeArg::Health => Purpose::Health,
            PurposeArg::General => Purpose::General,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Phone { number, age, usage } => {
            let context = if age.is_some() || usage.is_some() {
                Some(UserContext {
                    age_bracket: age.map(Into::into).unwrap_or_default(),
                    usage_duration: usage.map(Into::into).unwrap_or_default(),
                })
            } else {
                None
            };
            let analysis = analyze_phone(&number, context)?;
            match cli.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
                OutputFormat::Pretty => print_phone_analysis(&analysis),
            }
        }
        Commands::SixDigit { number } => {
            let analysis = analyze_six_digit(&number)?;
            match cli.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
                OutputFormat::Pretty => print_six_digit_analysis(&analysis),
            }
        }
        Commands::Compat { number, purpose } => {
            let purpose: Purpose = purpose.into();
            let compat = analyze_compatibility(&number, purpose)?;
            match cli.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&compat)?),
                OutputFormat::Pretty => {
                    println!(
                        "{} {}",
                        "Mục đích:".cyan().bold(),
                        purpose.label()
                    );
                    let score = format!("{}/100", compat.score);
                    let score_colored = if compat.score >= 65 {
                        score.green().bold()
                    } else if compat.score >= 50 {
                        score.yellow().bold()
                    } else {
                        score.red().bold()
                    };
                    println!("{} {} ({})", "Điểm:".cyan().bold(), score_colored, compat.level);
                    println!("{}", compat.description);
                    if !compat.strengths.is_empty() {
                        println!("\n{}", "Điểm mạnh:".green().bold());
                        for item in &compat.strengths {
                            println!("  + {}", item);
                        }
                    }
                    if !compat.weaknesses.is_empty() {
                        println!("\n{}", "Điểm yếu:".red().bold());
                        for item in &compat.weaknesses {
                            println!("  - {}", item);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_phone_analysis(analysis: &PhoneAnalysis) {
    println!(
        "{} {} (chuẩn hóa: {})",
        "Số:".cyan().bold(),
        analysis.input_digits,
        analysis.normalized_digits
    );

    if let Some(summary) = &analysis.summary {
        println!("{}", summary.yellow());
        return;
    }

    println!("\n{}", "Chuỗi sao:".cyan().bold());
    for star in &analysis.star_sequence {
        let nature = star.nature.to_string();
        let nature_colored = if star.nature.is_auspicious() {
            nature.green()
        } else if star.nature.is_inauspicious() {
            nature.red()
        } else {
            nature.yellow()
        };
        println!(
            "  {} -> {} ({}, năng lượng {})",
            star.original_pair, star.name, nature_colored, star.energy_level
        );
    }

    println!(
        "\n{} cát {} / hung {} / tổng {}",
        "Năng lượng:".cyan().bold(),
        analysis.energy.auspicious_sum,
        analysis.energy.inauspicious_sum,
        analysis.energy.total
    );
    println!("{} {}", "Cân bằng:".cyan().bold(), analysis.balance_text);

    if !analysis.key_combinations.is_empty() {
        println!("\n{}", "Tổ hợp đặc biệt:".green().bold());
        for combo in &analysis.key_combinations {
            println!("  {} ({}): {}", combo.value, combo.position, combo.description);
        }
    }

    if !analysis.dangerous_combinations.is_empty() {
        println!("\n{}", "Cảnh báo:".red().bold());
        for danger in &analysis.dangerous_combinations {
            println!(
                "  {} ({}): {}",
                danger.combination, danger.position, danger.description
            );
        }
    }

    let score = format!("{}/100", analysis.quality_score);
    let score_colored = if analysis.quality_score >= 65 {
        score.green().bold()
    } else if analysis.quality_score >= 50 {
        score.yellow().bold()
    } else {
        score.red().bold()
    };
    println!("\n{} {}", "Điểm chất lượng:".cyan().bold(), score_colored);
}

fn print_six_digit_analysis(analysis: &SixDigitAnalysis) {
    println!(
        "{} {} (6 số cuối: {}, chuẩn hóa: {})",
        "Số:".cyan().bold(),
        analysis.original_number,
        analysis.last_six_digits,
        analysis.normalized_sequence
    );

    if !analysis.individual_pairs.is_empty() {
        println!("\n{}", "Các cặp số:".cyan().bold());
        for pair in &analysis.individual_pairs {
            println!("  {}. {} -> {} ({})", pair.pair_number, pair.digits, pair.star, pair.nature);
        }
    }

    if !analysis.star_combinations.is_empty() {
        println!("\n{}", "Kết hợp sao:".cyan().bold());
        for combo in &analysis.star_combinations {
            println!("  {}. {}: {}", combo.combination_number, combo.stars, combo.meaning);
        }
    }

    println!("\n{}", analysis.overall_summary);
}
