//! Example Z-Script.
//!
//! Registers a handful of commands that exercise dispatch, nested
//! sub-commands, flag parsing, formatting and the shell helpers.

use std::process::ExitCode;

use clap::Parser;
use zscript::flags::{has_flag, parse_args, FlagSpec};
use zscript::format::{background, bold, foreground, underline, Color, Formatter};
use zscript::logging::init_tracing;
use zscript::git::Git;
use zscript::{shell, ExecutionContext, Result};

/// Example Z-Script.
#[derive(Debug, Parser)]
#[command(name = "zscript")]
#[command(version, about = "Example Z-Script with nested commands", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Command to run, followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("zscript starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut script = ExecutionContext::new(cli.args);
    register_commands(&mut script);
    script.run_main()
}

fn register_commands(script: &mut ExecutionContext) {
    script.add_command("all", |args, _| {
        if has_flag(args, "--uppercase") {
            println!("HELLO, WORLD!");
        } else {
            println!("Hello, world!");
        }
        Ok(())
    });

    script.add_command("flags", flags);
    script.add_command("formatting", |_, _| formatting());
    script.add_command("test", test);
    script.add_command("shell", shell_demo);
    script.add_command("git", |_, _| prune_branches());

    script.add_command("fail", |_, _| {
        shell::exec("echo 'compiling...' && exit 3")
    });

    script.add_command("broken", |_, _| {
        Err(anyhow::anyhow!("command body reached an impossible state").into())
    });
}

fn flags(args: &[String], _: &mut ExecutionContext) -> Result<()> {
    // -o and --output expect parameters, -v and --verbose do not.
    let spec = FlagSpec::new()
        .option("-o")
        .option("--output")
        .switch("-v")
        .switch("--verbose")
        .switch("--json");

    let parsed = parse_args(args, &spec)?
        .merge_flags("-o", "--output")
        .merge_flags("-v", "--verbose");

    if parsed.has_flag("--json") {
        println!("{}", parsed.to_json().map_err(anyhow::Error::from)?);
        return Ok(());
    }

    println!("args = {:?}", parsed.args());
    println!("-o = {:?}", parsed.flag_args("-o"));
    println!("-v count = {}", parsed.flag_count("-v"));
    println!("-v present = {}", parsed.has_flag("-v"));
    Ok(())
}

fn formatting() -> Result<()> {
    let mut out = Formatter::stdout();

    out.println("plain")?;
    out.apply(foreground(Color::Red))?;
    out.println("with foreground")?;
    out.apply(background(Color::LightGray))?;
    out.println("with background")?;
    out.apply(bold())?;
    out.println("with bold")?;
    out.apply(underline())?;
    out.println("with underline")?;

    out.pop()?;
    out.pop()?;
    out.pop()?;
    out.println("with foreground only")?;

    out.print("Error:", &(foreground(Color::Red) + &bold()))?;
    out.println(" something went wrong")?;

    out.reset()?;
    out.println("plain")
}

fn test(_: &[String], ctx: &mut ExecutionContext) -> Result<()> {
    ctx.add_command("all", |_, _| {
        println!("Usage: zscript test <up|down>");
        Ok(())
    });
    ctx.add_command("up", |_, _| {
        println!("[UP CODE]");
        Ok(())
    });
    ctx.add_command("down", |_, _| {
        println!("[DOWN CODE]");
        Ok(())
    });
    ctx.run()
}

fn shell_demo(args: &[String], _: &mut ExecutionContext) -> Result<()> {
    shell::exec("echo \"Hello, world!\"")?;

    let target = args.first().map(String::as_str).unwrap_or(".");
    if !shell::file_exists(target) {
        println!("{} does not exist", target);
        return Ok(());
    }

    println!("{} exists", target);
    println!(
        "{} was most recently edited on {}",
        target,
        shell::modification_time(target)?
    );
    if shell::is_folder(target)? {
        println!(
            "its contents were most recently edited on {}",
            shell::recursive_modification_time(target)?
        );
    }
    Ok(())
}

fn prune_branches() -> Result<()> {
    let git = Git::new();
    let mut out = Formatter::stdout();
    out.apply(foreground(Color::Yellow))?;
    out.println("Updating remote branch references...")?;
    git.fetch_remote_branches()?;

    let expired = git.expired_branches()?;
    if expired.is_empty() {
        out.apply(foreground(Color::Green))?;
        out.println("There are no local branches whose remote counterpart has been deleted")?;
        return out.reset();
    }

    out.println("The following local branches no longer have a remote counterpart:")?;
    for branch in &expired {
        out.println(&format!("    {}", branch))?;
    }
    out.reset()?;

    let answer = shell::read_input("Do you wish to erase them? [Y/n]")?;
    if answer.trim().eq_ignore_ascii_case("n") {
        return Ok(());
    }

    for branch in &expired {
        println!("    git branch -d {}", branch);
        git.delete_local_branch(branch, false)?;
    }
    Ok(())
}
