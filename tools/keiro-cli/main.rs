use clap::{Parser, Subcommand, ValueEnum};
use keiro::prelude::*;
use std::io::{self, Write};

/// A flow graph engine CLI: validate, arrange, and preview questionnaire flows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the structural validator and print every issue
    Validate {
        /// Path to the flow JSON file ({ "nodes": [...], "edges": [...] })
        flow_path: String,
    },
    /// Recompute every node position with the layered auto-arrange pass
    Arrange {
        /// Path to the flow JSON file
        flow_path: String,

        /// Primary layout direction
        #[arg(short, long, value_enum, default_value_t = DirectionCli::Vertical)]
        direction: DirectionCli,

        /// Gap between consecutive ranks
        #[arg(long, default_value_t = 120.0)]
        rank_gap: f64,

        /// Gap between neighboring nodes within a rank
        #[arg(long, default_value_t = 60.0)]
        node_gap: f64,
    },
    /// Walk the flow interactively from the terminal
    Preview {
        /// Path to the flow JSON file
        flow_path: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    Vertical,
    Horizontal,
}

impl From<DirectionCli> for LayoutDirection {
    fn from(value: DirectionCli) -> Self {
        match value {
            DirectionCli::Vertical => LayoutDirection::TopToBottom,
            DirectionCli::Horizontal => LayoutDirection::LeftToRight,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Validate { flow_path } => run_validate(&flow_path),
        Command::Arrange {
            flow_path,
            direction,
            rank_gap,
            node_gap,
        } => run_arrange(&flow_path, direction, rank_gap, node_gap),
        Command::Preview { flow_path } => run_preview(&flow_path),
    }
}

fn load_graph(flow_path: &str) -> FlowGraph {
    FlowGraph::from_file(flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load flow '{}': {}", flow_path, e))
    })
}

fn run_validate(flow_path: &str) {
    let graph = load_graph(flow_path);
    let issues = validate_flow(&graph);

    if issues.is_empty() {
        println!(
            "Flow is valid: {} nodes, {} edges, no issues.",
            graph.nodes.len(),
            graph.edges.len()
        );
        return;
    }

    for issue in &issues {
        println!("{}", issue);
    }
    if has_blocking(&issues) {
        eprintln!("\nFlow has blocking errors and cannot be published.");
        std::process::exit(1);
    }
    println!("\nFlow has warnings only and may still be published.");
}

fn run_arrange(flow_path: &str, direction: DirectionCli, rank_gap: f64, node_gap: f64) {
    let graph = load_graph(flow_path);
    let options = LayeredOptions {
        direction: direction.into(),
        rank_gap,
        node_gap,
        ..LayeredOptions::default()
    };

    let arranged = FlowGraph::new(layout_layered(&graph, &options), graph.edges.clone());
    let json = arranged
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize flow: {}", e)));
    println!("{}", json);
}

fn run_preview(flow_path: &str) {
    let graph = load_graph(flow_path);

    let issues = validate_flow(&graph);
    if has_blocking(&issues) {
        for issue in &issues {
            eprintln!("{}", issue);
        }
        exit_with_error("Flow has blocking errors; fix them before previewing.");
    }

    let Some(start) = graph.start_node() else {
        exit_with_error("Flow has no start node.");
    };

    println!("--- Keiro Flow Preview ---\n");
    let mut answers: AHashMap<String, AnswerValue> = AHashMap::new();
    let mut score = 0.0;
    let mut current = start.id.clone();

    loop {
        let Some(node) = graph.node(&current) else {
            break;
        };
        let answer = present_screen(node, &answers, &mut score);
        if let Some(answer) = &answer {
            answers.insert(current.clone(), answer.clone());
        }

        match next_node(&current, &graph, answer.as_ref()) {
            RouteOutcome::Next(id) => current = id,
            RouteOutcome::Terminal => break,
        }
    }

    println!("\n--- Preview finished ---");
    println!("Answered screens: {}", answers.len());
}

/// Print one screen, prompt for an answer where the screen asks a question,
/// and keep the running score up to date.
fn present_screen(
    node: &FlowNode,
    answers: &AHashMap<String, AnswerValue>,
    score: &mut f64,
) -> Option<AnswerValue> {
    match &node.kind {
        NodeKind::Start(data) => {
            println!("{}", resolve_pipes(&data.title, answers, DEFAULT_FALLBACK));
            if !data.description.is_empty() {
                println!("{}", resolve_pipes(&data.description, answers, DEFAULT_FALLBACK));
            }
            prompt_for_input(&format!("[{}]", data.button_label), None);
            None
        }
        NodeKind::Question(data) => {
            println!("\n{}", resolve_pipes(&data.text, answers, DEFAULT_FALLBACK));
            for (i, option) in data.options.iter().enumerate() {
                println!("  {}: {}", i + 1, option.label);
            }
            let raw = prompt_for_input("Your answer", None);
            let answer = parse_answer(data, &raw);
            *score += data.points_for(&answer);
            Some(answer)
        }
        NodeKind::End(data) => {
            println!("\n{}", resolve_pipes(&data.title, answers, DEFAULT_FALLBACK));
            if !data.description.is_empty() {
                println!("{}", resolve_pipes(&data.description, answers, DEFAULT_FALLBACK));
            }
            if data.show_score {
                println!("Your score: {}", score);
            }
            if let Some(url) = &data.redirect_url {
                println!("Continue at: {}", url);
            }
            None
        }
    }
}

/// Map raw terminal input onto the engine's answer shape. Numbered input
/// picks an option; multi-choice accepts a comma-separated list.
fn parse_answer(data: &QuestionData, raw: &str) -> AnswerValue {
    let option_label = |part: &str| -> String {
        part.parse::<usize>()
            .ok()
            .and_then(|n| data.options.get(n.saturating_sub(1)))
            .map(|opt| opt.label.clone())
            .unwrap_or_else(|| part.to_string())
    };

    if data.question_type == QuestionType::MultiChoice {
        return AnswerValue::Selection(
            raw.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(option_label)
                .collect(),
        );
    }
    if data.question_type.has_options() {
        return AnswerValue::Text(option_label(raw.trim()));
    }
    if data.question_type.is_scaled()
        && let Ok(n) = raw.trim().parse::<f64>()
    {
        return AnswerValue::Number(n);
    }
    AnswerValue::Text(raw.trim().to_string())
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
