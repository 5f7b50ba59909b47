pub mod device;
pub mod platform;

mod error;

use windows::Storage::Streams::{DataReader, IBuffer};

fn read_buffer(buf: &IBuffer) -> windows::core::Result<Vec<u8>> {
    let mut data = vec![0; buf.Length()? as usize];
    let reader = DataReader::FromBuffer(buf)?;
    reader.ReadBytes(data.as_mut_slice())?;
    Ok(data)
}
