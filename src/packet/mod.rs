// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Chat-protocol packet codec: the second worked consumer of the buffer
//! contract.
//!
//! Every packet opens with a u16 opcode; strings travel length-prefixed
//! and null-terminated (see `codec::strings`).

use crate::buffer::ByteBuffer;
use crate::codec::strings::{buffer_string, unbuffer_string};
use crate::codec::{DecodeFrom, DecodeResult, EncodeResult, EncodeTo};
use crate::error::CodecError;

/// Opcodes for the chat protocol.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Opcode {
    Login = 0x0001,
    Disconnect = 0x0002,
    Message = 0x0003,
}

impl Opcode {
    pub fn from_wire(raw: u16) -> Option<Opcode> {
        match raw {
            0x0001 => Some(Opcode::Login),
            0x0002 => Some(Opcode::Disconnect),
            0x0003 => Some(Opcode::Message),
            _ => None,
        }
    }

    pub fn to_wire(self) -> u16 {
        self as u16
    }
}

/// Client login: version number plus credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPacket {
    pub version: u32,
    pub username: String,
    pub password: String,
}

/// A chat message from a named user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessagePacket {
    pub name: String,
    pub message: String,
}

impl EncodeTo for LoginPacket {
    fn encode_to(&self, buf: &mut ByteBuffer) -> EncodeResult {
        buf.put_u16(Opcode::Login.to_wire());
        buf.put_u32(self.version);
        buffer_string(buf, &self.username);
        buffer_string(buf, &self.password);
        Ok(())
    }
}

impl EncodeTo for ChatMessagePacket {
    fn encode_to(&self, buf: &mut ByteBuffer) -> EncodeResult {
        buf.put_u16(Opcode::Message.to_wire());
        buffer_string(buf, &self.name);
        buffer_string(buf, &self.message);
        Ok(())
    }
}

/// Decode-side dispatch over the opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Login(LoginPacket),
    Disconnect,
    ChatMessage(ChatMessagePacket),
}

impl EncodeTo for Packet {
    fn encode_to(&self, buf: &mut ByteBuffer) -> EncodeResult {
        match self {
            Packet::Login(p) => p.encode_to(buf),
            Packet::Disconnect => {
                buf.put_u16(Opcode::Disconnect.to_wire());
                Ok(())
            }
            Packet::ChatMessage(p) => p.encode_to(buf),
        }
    }
}

impl DecodeFrom for Packet {
    fn decode_from(buf: &mut ByteBuffer) -> DecodeResult<Packet> {
        let raw = buf.get_u16();
        match Opcode::from_wire(raw) {
            Some(Opcode::Login) => {
                let version = buf.get_u32();
                let username = unbuffer_string(buf)?;
                let password = unbuffer_string(buf)?;
                Ok(Packet::Login(LoginPacket {
                    version,
                    username,
                    password,
                }))
            }
            Some(Opcode::Disconnect) => Ok(Packet::Disconnect),
            Some(Opcode::Message) => {
                let name = unbuffer_string(buf)?;
                let message = unbuffer_string(buf)?;
                Ok(Packet::ChatMessage(ChatMessagePacket { name, message }))
            }
            None => Err(CodecError::UnknownOpcode(raw)),
        }
    }
}
