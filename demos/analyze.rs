use asm86_lexer::{report::render_table, source::read_source, worker::analyze_in_background};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r"
    .DATA SEGMENT
        msg DB 'Hello, World!', 10, 13, '$'
        num DW 123
    .DATA ENDS

    .CODE SEGMENT
    START:
        MOV AX, @DATA
        MOV DS, AX

        LEA DX, msg
        MOV AH, 09h
        INT 21h

        MOV AH, 4Ch
        INT 21h
    .CODE ENDS
    END START
";

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("asm86_lexer=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Analyze the given file, or the built-in sample program
    let (title, code) = match std::env::args().nth(1) {
        Some(path) => match read_source(&path) {
            Ok(code) => (format!("Lexical Analysis Results for {path}"), code),
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        },
        None => ("Demo: Lexical Analysis Results".to_string(), SAMPLE.to_string()),
    };

    match analyze_in_background(code).await {
        Ok(tokens) => print!("{}", render_table(&title, &tokens)),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
