//! 智能助手页面
//!
//! 每条消息都是独立的一次 chat/ask 调用，不维护任何对话历史。
//! 给了 `--question` 就单次问答，否则进入逐行交互循环。

use std::io::{BufRead, Write};

use crate::client::{ClientError, GatewayClient};

async fn ask_once(client: &GatewayClient, question: &str) {
    match client.ask(question).await {
        Ok(result) => println!("🤖 {}", result.answer),
        Err(ClientError::Soft(message)) => println!("❌ {}", message),
        Err(ClientError::Decode { raw }) => println!("{}", raw),
        Err(e) => println!("❌ Request failed: {}", e),
    }
}

pub async fn run(client: &GatewayClient, question: Option<&str>) {
    println!("💬 Chat Assistant（空行退出）");

    if let Some(question) = question {
        if question.trim().is_empty() {
            println!("⚠️ 请输入问题。");
            return;
        }
        ask_once(client, question).await;
        return;
    }

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let question = line.trim();
                if question.is_empty() {
                    break;
                }
                ask_once(client, question).await;
            }
            Err(e) => {
                println!("❌ 读取输入失败: {}", e);
                break;
            }
        }
    }
}
