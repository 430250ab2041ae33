// Helpers for building tags by hand

pub fn synchsafe(n: u32) -> [u8; 4] {
	[
		((n >> 21) & 0x7F) as u8,
		((n >> 14) & 0x7F) as u8,
		((n >> 7) & 0x7F) as u8,
		(n & 0x7F) as u8,
	]
}

pub fn tag(major: u8, flags: u8, frames: &[Vec<u8>]) -> Vec<u8> {
	let body = frames.concat();

	let mut tag = vec![b'I', b'D', b'3', major, 0, flags];
	tag.extend(synchsafe(body.len() as u32));
	tag.extend(body);
	tag
}

pub fn v2_frame(id: &[u8; 3], body: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend(&(body.len() as u32).to_be_bytes()[1..]);
	frame.extend(body);
	frame
}

pub fn v3_frame(id: &[u8; 4], flags: u16, body: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend((body.len() as u32).to_be_bytes());
	frame.extend(flags.to_be_bytes());
	frame.extend(body);
	frame
}

pub fn v4_frame(id: &[u8; 4], flags: u16, body: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend(synchsafe(body.len() as u32));
	frame.extend(flags.to_be_bytes());
	frame.extend(body);
	frame
}
