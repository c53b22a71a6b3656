//! Messages relayed hop by hop through a [`SocialGraph`].

use serde::{Deserialize, Serialize};

use self::rsa::Key;
use crate::{error::Result, graphs::social_graph::SocialGraph, search::breadth_first};

pub mod rsa;
pub mod run_length;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Body {
    Text(String),
    Ciphertext(Vec<u64>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub receiver: String,
    pub metadata: String,
    pub body: Body,
    /// Users the message passes through, empty if the receiver is unreachable.
    pub path: Vec<String>,
}

impl Message {
    fn routed(
        graph: &SocialGraph,
        sender: &str,
        receiver: &str,
        metadata: &str,
        body: Body,
    ) -> Result<Message> {
        Ok(Message {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            metadata: metadata.to_string(),
            body,
            path: breadth_first::shortest_path(graph, sender, receiver)?,
        })
    }

    pub fn is_deliverable(&self) -> bool {
        !self.path.is_empty()
    }
}

pub fn send_run_length_encoded(
    graph: &SocialGraph,
    sender: &str,
    receiver: &str,
    content: &str,
) -> Result<Message> {
    let body = Body::Text(run_length::encode(content));
    Message::routed(graph, sender, receiver, "Run-length encoded", body)
}

/// Encrypts `content` with the public key of the receiver.
pub fn send_rsa(
    graph: &SocialGraph,
    sender: &str,
    receiver: &str,
    content: &str,
    receiver_public_key: &Key,
) -> Result<Message> {
    let body = Body::Ciphertext(rsa::encrypt(content, receiver_public_key)?);
    Message::routed(graph, sender, receiver, "RSA Encrypted", body)
}

/// Decrypts `ciphertext` with the private key of the receiver.
pub fn receive_rsa(
    graph: &SocialGraph,
    sender: &str,
    receiver: &str,
    ciphertext: &[u64],
    receiver_private_key: &Key,
) -> Result<Message> {
    let body = Body::Text(rsa::decrypt(ciphertext, receiver_private_key)?);
    Message::routed(graph, sender, receiver, "RSA Decrypted", body)
}

/// Attaches the signature of `content` made with the private key of the
/// sender.
pub fn sign_rsa(
    graph: &SocialGraph,
    sender: &str,
    receiver: &str,
    content: &str,
    sender_private_key: &Key,
) -> Result<Message> {
    let body = Body::Text(rsa::sign(content, sender_private_key).to_string());
    Message::routed(graph, sender, receiver, "RSA Signature", body)
}

/// Reports with `"true"` or `"false"` whether `signature` matches `content`.
pub fn verify_rsa(
    graph: &SocialGraph,
    sender: &str,
    receiver: &str,
    content: &str,
    signature: u64,
    sender_public_key: &Key,
) -> Result<Message> {
    let verified = rsa::verify(content, signature, sender_public_key);
    Message::routed(
        graph,
        sender,
        receiver,
        "RSA Verification",
        Body::Text(verified.to_string()),
    )
}
