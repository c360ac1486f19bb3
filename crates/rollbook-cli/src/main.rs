use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use rollbook_cli::seeder::{self, DEFAULT_SEED_PASSWORD, SeedConfig};
use rollbook_config::DatabaseConfig;
use rollbook_db::{IdentityStore, PgIdentityStore, PgPool, init_db_pool, run_migrations};
use rollbook_identity::IdentityService;
use rollbook_models::{RegisterStudentDto, RegisterTeacherDto, Student, Teacher};

#[derive(Parser)]
#[command(name = "rollbook-cli")]
#[command(about = "Rollbook CLI - Administrative tools for Rollbook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a student account
    CreateStudent {
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Permanent registration number
        #[arg(long)]
        prn: Option<String>,

        #[arg(short = 'd', long)]
        department: Option<String>,

        #[arg(long)]
        division: Option<String>,

        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Register a teacher account
    CreateTeacher {
        #[arg(short = 'n', long)]
        name: Option<String>,

        #[arg(short = 'e', long)]
        email: Option<String>,

        #[arg(short = 'd', long)]
        department: Option<String>,

        /// Job title, e.g. "Assistant Professor"
        #[arg(long)]
        designation: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake students and teachers
    Seed {
        #[arg(short = 's', long, default_value = "50")]
        students: usize,

        #[arg(short = 't', long, default_value = "10")]
        teachers: usize,

        /// Password shared by every seeded account
        #[arg(short = 'p', long, default_value = DEFAULT_SEED_PASSWORD)]
        password: String,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let pool = connect().await?;
    let store = PgIdentityStore::new(pool);

    match command {
        Commands::CreateStudent {
            name,
            prn,
            department,
            division,
            email,
            password,
        } => {
            let dto = RegisterStudentDto {
                name: prompt(name, "Full name")?,
                prn: prompt(prn, "PRN")?,
                department: prompt(department, "Department")?,
                division: prompt(division, "Division")?,
                email: prompt(email, "Email address")?,
                password: prompt_password(password)?,
            };
            let students: &dyn IdentityStore<Student> = &store;
            let student = IdentityService::register(students, dto).await?;

            println!("\n✅ Student created successfully!");
            println!("   ID: {}", student.id);
            println!("   Email: {}", student.email);
            println!("   PRN: {}", student.prn);
        }
        Commands::CreateTeacher {
            name,
            email,
            department,
            designation,
            password,
        } => {
            let designation = match designation {
                Some(value) => Some(value),
                None => prompt_optional("Designation (optional)")?,
            };
            let dto = RegisterTeacherDto {
                name: prompt(name, "Full name")?,
                email: prompt(email, "Email address")?,
                department: prompt(department, "Department")?,
                designation,
                password: prompt_password(password)?,
            };
            let teachers: &dyn IdentityStore<Teacher> = &store;
            let teacher = IdentityService::register(teachers, dto).await?;

            println!("\n✅ Teacher created successfully!");
            println!("   ID: {}", teacher.id);
            println!("   Email: {}", teacher.email);
        }
        Commands::Seed {
            students,
            teachers,
            password,
        } => {
            let config = SeedConfig::new(students, teachers).with_password(password);
            seeder::seed_all(&store, config).await?;
        }
        Commands::Migrate => {
            println!("✅ Migrations applied");
        }
    }

    Ok(())
}

/// Connects and brings the schema up to date; every command needs both.
async fn connect() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    Ok(pool)
}

fn prompt(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::new().with_prompt(label).interact_text()?),
    }
}

fn prompt_optional(label: &str) -> anyhow::Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(Some(value).filter(|v| !v.trim().is_empty()))
}

fn prompt_password(value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?),
    }
}
