use std::io::BufRead;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use treeshape::{
    eval_expr, evaluate_iterative, BracketFrontend, EvalContext, Frontend, RustFrontend,
    TreeshapeError,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Syntax {
    /// Rust constructor syntax, e.g. `Binary(Factor(1), Factor(2))`
    Rust,
    /// Rendered notation, e.g. `B[1#2]`
    Bracket,
}

/// Render Factor/Binary expression trees
#[derive(Parser, Debug)]
#[command(name = "treeshape", version)]
struct Arguments {
    /// Expressions to render; one per line is read from stdin when omitted
    exprs: Vec<String>,

    /// Input syntax
    #[arg(long, value_enum, default_value_t = Syntax::Rust)]
    syntax: Syntax,

    /// Fail trees nested deeper than this many binary levels
    #[arg(long)]
    max_depth: Option<usize>,

    /// Log every visited node
    #[arg(long)]
    trace: bool,

    /// Also print the depth of each tree
    #[arg(long)]
    depth: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.trace {
        // Overrides whatever RUST_LOG says for this crate
        logger.filter_module("treeshape", LevelFilter::Trace);
    }
    logger.init();

    let frontend: Box<dyn Frontend> = match args.syntax {
        Syntax::Rust => Box::new(RustFrontend::new()),
        Syntax::Bracket => Box::new(BracketFrontend::new()),
    };
    // Tracing needs the guarded walk; without either flag render stack-safely
    let ctx = (args.max_depth.is_some() || args.trace).then(|| {
        args.max_depth
            .map(EvalContext::with_max_depth)
            .unwrap_or_default()
            .with_trace(args.trace)
    });

    let inputs = if args.exprs.is_empty() {
        read_stdin()?
    } else {
        args.exprs.clone()
    };
    info!("rendering {} input(s) with the {} frontend", inputs.len(), frontend.name());

    let mut failures = 0usize;
    for source in &inputs {
        match render(frontend.as_ref(), source, ctx.as_ref()) {
            Ok((text, depth)) => {
                println!("{}", text);
                if args.depth {
                    println!("depth: {}", depth);
                }
            }
            Err(TreeshapeError::Parse(e)) => {
                failures += 1;
                eprintln!("{}", frontend.format_error(&e, source));
            }
            Err(e) => {
                failures += 1;
                eprintln!("error: {}", e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} input(s) failed", failures, inputs.len());
    }
    Ok(())
}

/// Parse and render one input, returning the text and the tree depth.
fn render(
    frontend: &dyn Frontend,
    source: &str,
    ctx: Option<&EvalContext>,
) -> treeshape::Result<(String, usize)> {
    let tree = frontend.parse(source)?;
    let text = match ctx {
        Some(ctx) => eval_expr(&tree, ctx)?,
        None => evaluate_iterative(&tree),
    };
    debug!("rendered {} nodes", tree.node_count());
    Ok((text, tree.depth()))
}

fn read_stdin() -> anyhow::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}
