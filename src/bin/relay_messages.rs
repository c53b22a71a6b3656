use archipelago::{
    graphs::social_graph::SocialGraph,
    relay::{
        receive_rsa,
        rsa::{self, KeyPair, DEFAULT_PRIMES},
        send_rsa, send_run_length_encoded, sign_rsa, verify_rsa, Message,
    },
    report::render_message,
    utility::init_tracing,
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, ValueEnum)]
enum Mode {
    RunLength,
    Rsa,
    Sign,
}

/// Relays a message through the Vic - Joana - Andy network.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "Vic")]
    sender: String,

    #[arg(short, long, default_value = "Andy")]
    receiver: String,

    #[arg(short, long, default_value = "YAAARRMMMMMMMAATEEEYYYYYYY")]
    content: String,

    #[arg(short, long, value_enum, default_value_t = Mode::RunLength)]
    mode: Mode,

    /// Print the messages as json
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn network() -> SocialGraph {
    let mut network = SocialGraph::new();
    network.add_user("Vic");
    network.add_user("Joana");
    network.add_user("Andy");
    network.add_edge("Vic", "Joana");
    network.add_edge("Joana", "Andy");
    network
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let network = network();
    let (sender, receiver, content) = (&args.sender, &args.receiver, &args.content);
    let (p, q) = DEFAULT_PRIMES;

    let messages: Vec<Message> = match args.mode {
        Mode::RunLength => vec![send_run_length_encoded(
            &network, sender, receiver, content,
        )?],
        Mode::Rsa => {
            let receiver_keys = KeyPair::generate(p, q)?;
            let encrypted = send_rsa(&network, sender, receiver, content, &receiver_keys.public)?;
            let ciphertext = rsa::encrypt(content, &receiver_keys.public)?;
            let decrypted = receive_rsa(
                &network,
                sender,
                receiver,
                &ciphertext,
                &receiver_keys.private,
            )?;
            vec![encrypted, decrypted]
        }
        Mode::Sign => {
            let sender_keys = KeyPair::generate(p, q)?;
            let signed = sign_rsa(&network, sender, receiver, content, &sender_keys.private)?;
            let signature = rsa::sign(content, &sender_keys.private);
            let verified = verify_rsa(
                &network,
                sender,
                receiver,
                content,
                signature,
                &sender_keys.public,
            )?;
            vec![signed, verified]
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
    } else {
        for message in &messages {
            println!("{}", render_message(message));
        }
    }

    Ok(())
}
