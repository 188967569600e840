use actix_web_actors::ws;
use actix::ActorContext;

use crate::server::ws_error::ws_error_message;
use crate::server::anti_spam::AntiSpamState;

/// Helpers shared by WebSocket actors that apply anti-spam rules.
pub trait WsActorUtils {
    fn anti_spam(&mut self) -> &mut AntiSpamState;
    fn session_id(&self) -> String;

    /// Sends a ban message, then closes and stops the actor.
    fn send_ban_and_close<A>(&mut self, ctx: &mut ws::WebsocketContext<A>)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let session = self.session_id();
        let ban_remaining_secs = self.anti_spam().ban_remaining_secs().to_string();
        ctx.text(ws_error_message(
            "BANNED",
            &format!("Banned for spamming, retry in {ban_remaining_secs}s."),
            Some(&session),
        ));
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some("Banned for spam".into()),
        }));
        ctx.stop();
    }

    /// Sends an error unless it is a repeated protocol error; bans on response flood.
    fn send_error_and_maybe_ban<A>(
        &mut self,
        ctx: &mut ws::WebsocketContext<A>,
        code: &str,
        message: &str,
        context: Option<&str>,
    )
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let session = self.session_id();
        if self.anti_spam().should_send_error(code, &session) {
            if self.anti_spam().record_response(&session) {
                self.send_ban_and_close(ctx);
                return;
            }
            ctx.text(ws_error_message(code, message, context));
        }
    }

    /// Sends a JSON response, or bans on response flood.
    fn send_json_or_ban<A>(
        &mut self,
        ctx: &mut ws::WebsocketContext<A>,
        json_str: String,
    )
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let session = self.session_id();
        if self.anti_spam().record_response(&session) {
            self.send_ban_and_close(ctx);
            return;
        }
        ctx.text(json_str);
    }
}
