use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use log::{debug, error};

use dept_portal::config::AppConfig;
use dept_portal::domain::entities::exam::ExamType;
use dept_portal::domain::entities::notice::NoticeCategory;
use dept_portal::domain::entities::record::RecordKind;
use dept_portal::domain::entities::view::{PageResult, SortDirection};
use dept_portal::infra::sqlite::repo::SqliteRepo;
use dept_portal::ui::pagination::render_page_bar;
use dept_portal::ui::table::render_table;
use dept_portal::usecase::ports::repo::RecordRepository;
use dept_portal::usecase::services::course_browser::{CourseControls, CourseSort};
use dept_portal::usecase::services::exam_schedule::{ExamControls, ExamSort};
use dept_portal::usecase::services::import_service::ImportService;
use dept_portal::usecase::services::notice_board::NoticeControls;
use dept_portal::usecase::services::query_service::QueryService;

const USAGE: &str = "usage:
  portal import <file> [courses|exams|notices]
  portal clear <courses|exams|notices>
  portal courses [--search T] [--program P] [--year N] [--semester N]
                 [--sort code|title|year|credits] [--desc] [--page N]
  portal exams   [--search T] [--type midterm|final|quiz|makeup]
                 [--from YYYY-MM-DD] [--to YYYY-MM-DD]
                 [--sort schedule|course|room] [--desc] [--page N]
  portal notices [--search T] [--category C] [--year N] [--month N] [--page N]";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some((command, rest)) = args.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = AppConfig::from_env()?;
    debug!("using database {}", config.db_path.display());
    let repo: Arc<dyn RecordRepository> = Arc::new(SqliteRepo::new(config.db_path.clone()));
    repo.init()?;

    match command.as_str() {
        "import" => {
            let (path, kind) = match rest {
                [path] => (PathBuf::from(path), None),
                [path, kind] => (PathBuf::from(path), Some(parse_arg::<RecordKind>(kind)?)),
                _ => bail!("{USAGE}"),
            };
            let service = ImportService::new(repo);
            for result in service.import_path(&path, kind)? {
                println!("imported {} {}", result.row_count, result.kind);
            }
        }
        "clear" => {
            let [kind] = rest else { bail!("{USAGE}") };
            let kind = parse_arg::<RecordKind>(kind)?;
            repo.clear(kind)?;
            println!("cleared {kind}");
        }
        "courses" => {
            let controls = course_controls(&parse_flags(rest)?)?;
            let page = QueryService::new(repo).course_page(&controls, config.course_page_size)?;
            let rows = page
                .rows
                .iter()
                .map(|c| {
                    vec![
                        c.code.clone(),
                        c.title.clone(),
                        c.program.clone(),
                        c.year.to_string(),
                        c.semester.to_string(),
                        c.credits.to_string(),
                        c.instructor.clone(),
                    ]
                })
                .collect::<Vec<_>>();
            print_page(
                &["Code", "Title", "Program", "Year", "Sem", "Credits", "Instructor"],
                &rows,
                &page,
            );
        }
        "exams" => {
            let controls = exam_controls(&parse_flags(rest)?)?;
            let page = QueryService::new(repo).exam_page(&controls, config.exam_page_size)?;
            let rows = page
                .rows
                .iter()
                .map(|e| {
                    vec![
                        e.date.format("%Y-%m-%d").to_string(),
                        e.start.format("%H:%M").to_string(),
                        e.course_code.clone(),
                        e.course_title.clone(),
                        e.exam_type.to_string(),
                        e.room.clone(),
                    ]
                })
                .collect::<Vec<_>>();
            print_page(
                &["Date", "Start", "Code", "Course", "Type", "Room"],
                &rows,
                &page,
            );
        }
        "notices" => {
            let controls = notice_controls(&parse_flags(rest)?)?;
            let page = QueryService::new(repo).notice_page(&controls, config.notice_page_size)?;
            let rows = page
                .rows
                .iter()
                .map(|n| {
                    vec![
                        if n.pinned { "*".to_string() } else { String::new() },
                        n.published.format("%Y-%m-%d").to_string(),
                        n.category.to_string(),
                        n.title.clone(),
                    ]
                })
                .collect::<Vec<_>>();
            print_page(&["", "Published", "Category", "Title"], &rows, &page);
        }
        "help" | "--help" | "-h" => println!("{USAGE}"),
        other => bail!("unknown command {other:?}\n{USAGE}"),
    }

    Ok(())
}

fn print_page<T>(headers: &[&str], rows: &[Vec<String>], page: &PageResult<T>) {
    if page.total_matching == 0 {
        println!("no matching records");
        return;
    }
    print!("{}", render_table(headers, rows));
    println!(
        "page {} of {}, {} matching",
        page.effective_page, page.total_pages, page.total_matching
    );
    println!("{}", render_page_bar(page.effective_page, page.total_pages));
}

#[derive(Debug, Default)]
struct Flags {
    values: Vec<(String, String)>,
    switches: Vec<String>,
}

impl Flags {
    fn value(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn parsed<T: FromStr>(&self, name: &str) -> Result<Option<T>>
    where
        T::Err: std::fmt::Display,
    {
        self.value(name)
            .map(|raw| parse_arg::<T>(raw).with_context(|| format!("--{name}")))
            .transpose()
    }

    fn switch(&self, name: &str) -> bool {
        self.switches.iter().any(|s| s == name)
    }
}

const SWITCHES: [&str; 1] = ["desc"];

fn parse_flags(args: &[String]) -> Result<Flags> {
    let mut flags = Flags::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let Some(name) = arg.strip_prefix("--") else {
            bail!("unexpected argument {arg:?}\n{USAGE}")
        };
        if SWITCHES.contains(&name) {
            flags.switches.push(name.to_string());
            continue;
        }
        let value = iter
            .next()
            .ok_or_else(|| anyhow!("--{name} needs a value"))?;
        flags.values.push((name.to_string(), value.clone()));
    }
    Ok(flags)
}

fn parse_arg<T: FromStr>(raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|err| anyhow!("invalid value {raw:?}: {err}"))
}

fn direction(flags: &Flags) -> SortDirection {
    if flags.switch("desc") {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}

fn course_controls(flags: &Flags) -> Result<CourseControls> {
    Ok(CourseControls {
        search: flags.value("search").unwrap_or_default().to_string(),
        program: flags.value("program").map(str::to_string),
        year: flags.parsed::<u8>("year")?,
        semester: flags.parsed::<u8>("semester")?,
        sort: flags.parsed::<CourseSort>("sort")?.unwrap_or_default(),
        direction: direction(flags),
        page: flags.parsed::<i64>("page")?.unwrap_or(1),
    })
}

fn exam_controls(flags: &Flags) -> Result<ExamControls> {
    Ok(ExamControls {
        search: flags.value("search").unwrap_or_default().to_string(),
        exam_type: flags.parsed::<ExamType>("type")?,
        from: flags.parsed::<NaiveDate>("from")?,
        to: flags.parsed::<NaiveDate>("to")?,
        sort: flags.parsed::<ExamSort>("sort")?.unwrap_or_default(),
        direction: direction(flags),
        page: flags.parsed::<i64>("page")?.unwrap_or(1),
    })
}

fn notice_controls(flags: &Flags) -> Result<NoticeControls> {
    Ok(NoticeControls {
        search: flags.value("search").unwrap_or_default().to_string(),
        category: flags.parsed::<NoticeCategory>("category")?,
        year: flags.parsed::<i32>("year")?,
        month: flags.parsed::<u32>("month")?,
        page: flags.parsed::<i64>("page")?.unwrap_or(1),
    })
}
