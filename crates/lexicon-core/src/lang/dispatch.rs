//! Delivery of formatted messages to recipients.
//!
//! Every helper is a silent no-op when the recipient or a message is
//! missing, when the recipient cannot be reached, or when the formatted text
//! comes out empty. Formatting errors are returned to the caller.
use crate::lang::error::Result;
use crate::lang::text::TemplatedText;
use crate::value::Value;

/// A message sink, such as a connected player or the console.
pub trait Recipient {
    /// Name used to address this recipient in raw commands
    fn identifier(&self) -> &str;

    /// Whether messages sent now would be delivered
    fn is_reachable(&self) -> bool {
        true
    }

    /// Deliver already formatted text
    fn send_text(&self, text: &str);
}

/// Out-of-band channel that executes raw host commands.
pub trait CommandChannel {
    fn submit(&self, command_line: &str);
}

fn reachable<R: Recipient + ?Sized>(target: Option<&R>) -> Option<&R> {
    target.filter(|r| r.is_reachable())
}

/// Send `message` wrapped in its own format.
pub fn send_message<R: Recipient + ?Sized>(
    target: Option<&R>,
    message: Option<&TemplatedText>,
    args: &[Value],
) -> Result<()> {
    let Some(message) = message else {
        return Ok(());
    };
    let format = message.wrapper();
    send_formatted(target, format.as_deref(), Some(message), args)
}

/// Send `message` substituted into `format`, with colors translated.
pub fn send_formatted<R: Recipient + ?Sized>(
    target: Option<&R>,
    format: Option<&TemplatedText>,
    message: Option<&TemplatedText>,
    args: &[Value],
) -> Result<()> {
    let (Some(target), Some(format), Some(message)) = (reachable(target), format, message) else {
        return Ok(());
    };
    let text = format.format_and_color(&[Value::Text(message.format(args)?)])?;
    if !text.is_empty() {
        target.send_text(&text);
    }
    Ok(())
}

/// Send `message` with colors translated but no enclosing format.
pub fn send_raw<R: Recipient + ?Sized>(
    target: Option<&R>,
    message: Option<&TemplatedText>,
    args: &[Value],
) -> Result<()> {
    let (Some(target), Some(message)) = (reachable(target), message) else {
        return Ok(());
    };
    let text = message.format_and_color(args)?;
    if !text.is_empty() {
        target.send_text(&text);
    }
    Ok(())
}

/// Hand a JSON chat payload to the host's `tellraw` command.
pub fn tell_raw<C, R>(channel: &C, target: Option<&R>, message: Option<&TemplatedText>, args: &[Value]) -> Result<()>
where
    C: CommandChannel + ?Sized,
    R: Recipient + ?Sized,
{
    submit_command(channel, "tellraw", target, message, args)
}

/// Hand a JSON title payload to the host's `title` command.
pub fn send_title<C, R>(channel: &C, target: Option<&R>, message: Option<&TemplatedText>, args: &[Value]) -> Result<()>
where
    C: CommandChannel + ?Sized,
    R: Recipient + ?Sized,
{
    submit_command(channel, "title", target, message, args)
}

fn submit_command<C, R>(
    channel: &C,
    command: &str,
    target: Option<&R>,
    message: Option<&TemplatedText>,
    args: &[Value],
) -> Result<()>
where
    C: CommandChannel + ?Sized,
    R: Recipient + ?Sized,
{
    let (Some(target), Some(message)) = (target, message) else {
        return Ok(());
    };
    let payload = message.format(args)?;
    if !payload.is_empty() {
        channel.submit(&format!("{} {} {}", command, target.identifier(), payload));
    }
    Ok(())
}
