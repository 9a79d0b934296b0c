use bulk_rename::cli::{execute_rename, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 入力エラーは呼び出し側が標準出力で受け取る
    if let Err(error) = execute_rename(cli).await {
        if error.is_input_error() {
            println!("{error}");
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}
