use anyhow::Context;
use clap::Parser;
use pcb_inspect::{cli, config, error, export, interactive, logging, output, source};
use cli::{Cli, Commands};
use config::Config;
use error::PcbInspectError;
use pcb_inspect_common::{
    active_index, detail_fixture, occurrences_from_counts, open_detail, DefectCatalog, DefectKind,
    DetailDefectKind, FeedbackPage, GradeResult, GradeThresholds, GradingPolicy, InspectionReport,
    ReportOptions, SelectTarget, NAV_ITEMS,
};
use std::path::PathBuf;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)
        .with_context(|| format!("設定ファイルの読み込みに失敗: {}", config_path.display()))?;

    match cli.command {
        Commands::Summary { input, select, interactive } => {
            let target = SelectTarget::<DefectKind>::parse(&select)?;
            let input = input.or_else(|| config.default_input.clone());

            let shared = Mutex::new(FeedbackPage::new());
            let similarity = source::load_page_from(&shared, input.as_deref())
                .await
                .with_context(|| format!("検出結果の読み込みに失敗: {}", describe_input(input.as_deref())))?
                .similarity();
            let mut page = shared.into_inner();
            page.select(target);

            output::print_summary(&page, similarity, &config.summary_grading, &config.detail_grading);

            if interactive {
                println!();
                interactive::run_defect_menu(&mut page, &config.detail_grading)?;
            }
        }

        Commands::Detail { kind } => {
            let view = open_detail::<DetailDefectKind>(&kind, &detail_fixture(), &config.detail_grading)?;
            output::print_detail(&view);
        }

        Commands::Grade { count, summary } => {
            let policy = if summary { &config.summary_grading } else { &config.detail_grading };
            let result = policy.evaluate(count);
            println!("欠陥数 {} → SIMILARITY: {}%  GRADE: {}", count, result.score, result.grade);
        }

        Commands::Labels => {
            println!("一覧ページ:");
            for kind in DefectKind::ALL {
                println!("  {:<14} {}", kind.key(), kind.label());
            }
            println!("詳細ページ:");
            for kind in DetailDefectKind::ALL {
                println!("  {:<14} {}", kind.key(), kind.label());
            }
        }

        Commands::Nav { path } => {
            match active_index(&path) {
                Some(index) => println!("{} → {} (index {})", path, NAV_ITEMS[index].label, index),
                None => println!("{} → 該当なし", path),
            }
            println!("{}", output::format_nav_bar(&path));
        }

        Commands::FromCounts { counts, output } => {
            let mut parsed = Vec::with_capacity(counts.len());
            for arg in &counts {
                let (key, count) = cli::parse_count_arg(arg).map_err(PcbInspectError::InvalidInput)?;
                parsed.push((DefectKind::parse(&key)?, count));
            }

            let occurrences = occurrences_from_counts(&parsed);
            let json = serde_json::to_string_pretty(&occurrences)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("書き込みに失敗: {}", path.display()))?;
                    println!("✔ {}件を保存: {}", occurrences.len(), path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Export { input, select, format, output, title, similarity } => {
            println!("📄 pcb-inspect - レポート出力\n");

            if let Some(value) = similarity {
                if !(0.0..=100.0).contains(&value) {
                    return Err(PcbInspectError::InvalidInput(format!(
                        "similarity must be within 0-100: {}",
                        value
                    ))
                    .into());
                }
            }

            let target = SelectTarget::<DefectKind>::parse(&select)?;
            let input = input.or_else(|| config.default_input.clone());

            let shared = Mutex::new(FeedbackPage::new());
            let loaded_similarity = source::load_page_from(&shared, input.as_deref())
                .await
                .with_context(|| format!("検出結果の読み込みに失敗: {}", describe_input(input.as_deref())))?
                .similarity();
            let mut page = shared.into_inner();
            page.select(target);

            let visible = page.visible().unwrap_or_default();
            println!("✔ {}件の欠陥を出力対象に設定\n", visible.len());

            let options = ReportOptions {
                title: title.unwrap_or_else(|| config.report_title.clone()),
                generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
                similarity: similarity.or(loaded_similarity),
                board_policy: config.summary_grading,
                line_policy: config.detail_grading,
            };
            let report = InspectionReport::build(&visible, &options);

            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_report(&report, &config.theme, &format, &output_dir)?;

            println!("\n✅ 出力完了");
        }

        Commands::Config { show, set_thresholds, fixed_score, fixed_grade, summary_by_count, reset } => {
            let mut config = if reset { Config::default() } else { config };
            let mut changed = reset;

            if let Some(values) = set_thresholds {
                let (a_max_count, b_max_count) = match values.as_slice() {
                    [a, b] => (*a, *b),
                    _ => return Err(PcbInspectError::InvalidInput("A_MAX B_MAX を指定してください".into()).into()),
                };
                let base = match config.detail_grading {
                    GradingPolicy::Thresholds(t) => t,
                    GradingPolicy::Fixed(_) => GradeThresholds::default(),
                };
                config.detail_grading = GradingPolicy::Thresholds(GradeThresholds {
                    a_max_count,
                    b_max_count,
                    ..base
                });
                if let GradingPolicy::Thresholds(_) = config.summary_grading {
                    config.summary_grading = config.detail_grading;
                }
                changed = true;
            }

            if let (Some(score), Some(grade)) = (fixed_score, fixed_grade) {
                config.summary_grading = GradingPolicy::Fixed(GradeResult::new(score, grade));
                changed = true;
            }

            if summary_by_count {
                config.summary_grading = match config.detail_grading {
                    GradingPolicy::Thresholds(t) => GradingPolicy::Thresholds(t),
                    GradingPolicy::Fixed(_) => GradingPolicy::detail_default(),
                };
                changed = true;
            }

            if changed {
                config.save_to(&config_path)?;
                println!("✔ 設定を保存しました: {}", config_path.display());
            }

            if show || !changed {
                println!("設定: {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn describe_input(input: Option<&std::path::Path>) -> String {
    input
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "サンプルデータ".to_string())
}
