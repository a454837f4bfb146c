//! The interactive operation menu.
//!
//! Each pass through [`App::run`] shows the menu, reads one choice and runs at
//! most one operation. Operation failures are printed and the loop continues;
//! only console I/O errors end the session early.

use crate::{
    config::DEFAULT_MAX_INPUT_ATTEMPTS,
    console::Console,
    input::{self, ValidationError},
};
use action::{
    Action, Approve, Burn, Confirmer, Executor, Mint, Submitter, TransactionResult, Transfer,
};
use alloy_primitives::Address;
use std::io;
use token::{TokenInfo, TokenReader};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

const MENU: &str = "\n=== Choose an operation: ===
1. Approve spender for tokens
2. Transfer tokens to another wallet
3. Check allowance
4. Mint tokens (requires minter role)
5. Burn tokens (requires burner role)
6. Check token balance
7. Exit";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Approve,
    Transfer,
    CheckAllowance,
    Mint,
    Burn,
    CheckBalance,
    Exit,
}

impl Choice {
    /// Map a menu answer (`1`-`7`) to its entry.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Approve),
            "2" => Some(Self::Transfer),
            "3" => Some(Self::CheckAllowance),
            "4" => Some(Self::Mint),
            "5" => Some(Self::Burn),
            "6" => Some(Self::CheckBalance),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive session bound to one account and one token.
pub struct App<C, S, R, W> {
    executor: Executor<C, S>,
    console: Console<R, W>,
    account: Address,
    token: TokenInfo,
    max_attempts: u32,
}

impl<C, S, R, W> App<C, S, R, W>
where
    C: TokenReader + Confirmer,
    S: Submitter,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub const fn new(
        executor: Executor<C, S>,
        console: Console<R, W>,
        account: Address,
        token: TokenInfo,
    ) -> Self {
        Self {
            executor,
            console,
            account,
            token,
            max_attempts: DEFAULT_MAX_INPUT_ATTEMPTS,
        }
    }

    /// Limit how many invalid answers a single prompt accepts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Print the token metadata read at startup.
    pub async fn print_token_info(&mut self) -> io::Result<()> {
        let token = &self.token;
        let lines = [
            format!("Token Address: {}", token.address),
            format!("Token Name: {}", token.name),
            format!("Token Symbol: {}", token.symbol),
            format!("Token Decimals: {}", token.decimals),
            format!("Total Supply: {} {}\n", token.total_supply, token.symbol),
        ];
        for line in lines {
            self.console.say(line).await?;
        }
        Ok(())
    }

    /// Print the account's token balance before the first menu.
    ///
    /// Unlike menu choice 6, a failed read here is returned to the caller.
    pub async fn print_opening_balance(&mut self) -> eyre::Result<()> {
        self.console
            .say("--- Step 3: Checking Token Balance ---")
            .await?;
        let balance = token::balance_of(self.executor.client(), self.account).await?;
        self.console
            .say(format!("Your {} Balance: {balance}\n", self.token.symbol))
            .await?;
        Ok(())
    }

    /// Run the menu until the user exits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.console.say(MENU).await?;

            let Some(answer) = self.console.ask("\nEnter your choice (1-7): ").await? else {
                break;
            };

            match Choice::parse(&answer) {
                Some(Choice::Exit) => break,
                Some(choice) => self.dispatch(choice).await?,
                None => {
                    self.console
                        .say("Invalid choice. Please try again.")
                        .await?
                }
            }
        }

        self.console.say("\nExiting... Goodbye!").await
    }

    async fn dispatch(&mut self, choice: Choice) -> io::Result<()> {
        debug!(?choice, "Dispatching menu choice");
        match choice {
            Choice::Approve => self.approve().await,
            Choice::Transfer => self.transfer().await,
            Choice::CheckAllowance => self.check_allowance().await,
            Choice::Mint => self.mint().await,
            Choice::Burn => self.burn().await,
            Choice::CheckBalance => self.check_balance().await,
            Choice::Exit => Ok(()),
        }
    }

    async fn approve(&mut self) -> io::Result<()> {
        self.console.say("\n--- Approve Spender ---").await?;

        let Some(spender) = self
            .prompt_address("Enter spender address (0x...): ", None)
            .await?
        else {
            return Ok(());
        };
        let Some(amount) = self
            .prompt_amount("Enter amount to approve (e.g., 100): ")
            .await?
        else {
            return Ok(());
        };

        let approve = Approve {
            spender,
            amount: amount.clone(),
        };
        let success = format!(
            "✅ Successfully approved {amount} {} for {spender}",
            self.token.symbol
        );
        self.submit(&approve, "Approval", success).await
    }

    async fn transfer(&mut self) -> io::Result<()> {
        self.console.say("\n--- Transfer Tokens ---").await?;

        let Some(to) = self
            .prompt_address("Enter recipient address (0x...): ", None)
            .await?
        else {
            return Ok(());
        };
        let Some(amount) = self
            .prompt_amount("Enter amount to transfer (e.g., 10): ")
            .await?
        else {
            return Ok(());
        };

        let transfer = Transfer {
            from: self.account,
            to,
            amount: amount.clone(),
        };
        let success = format!(
            "✅ Successfully transferred {amount} {} to {to}",
            self.token.symbol
        );
        self.submit(&transfer, "Transfer", success).await
    }

    async fn check_allowance(&mut self) -> io::Result<()> {
        self.console.say("\n--- Check Allowance ---").await?;

        let Some(owner) = self
            .prompt_address(
                "Enter owner address (0x...) or press Enter to use your address: ",
                Some(self.account),
            )
            .await?
        else {
            return Ok(());
        };
        let Some(spender) = self
            .prompt_address("Enter spender address (0x...): ", None)
            .await?
        else {
            return Ok(());
        };

        match token::allowance_of(self.executor.client(), owner, spender).await {
            Ok(allowance) => {
                self.console
                    .say(format!(
                        "\n📊 Allowance: {allowance} {}",
                        self.token.symbol
                    ))
                    .await?;
                self.console.say(format!("Owner: {owner}")).await?;
                self.console.say(format!("Spender: {spender}")).await
            }
            Err(e) => {
                self.console
                    .say(format!("❌ Failed to check allowance: {e}"))
                    .await
            }
        }
    }

    async fn mint(&mut self) -> io::Result<()> {
        self.console.say("\n--- Mint Tokens ---").await?;
        self.console
            .say("⚠️  Note: This requires your address to have the MINTER role")
            .await?;

        let Some(to) = self
            .prompt_address(
                "Enter recipient address (0x...) or press Enter to mint to yourself: ",
                Some(self.account),
            )
            .await?
        else {
            return Ok(());
        };
        let Some(amount) = self
            .prompt_amount("Enter amount to mint (e.g., 1000): ")
            .await?
        else {
            return Ok(());
        };

        let mint = Mint {
            to,
            amount: amount.clone(),
        };
        let success = format!(
            "✅ Successfully minted {amount} {} to {to}",
            self.token.symbol
        );
        self.submit(&mint, "Minting", success).await
    }

    async fn burn(&mut self) -> io::Result<()> {
        self.console.say("\n--- Burn Tokens ---").await?;
        self.console
            .say("⚠️  Note: This requires your address to have the BURNER role")
            .await?;
        self.console
            .say("⚠️  This contract burns ALL tokens from the \"from\" address")
            .await?;

        let Some(from) = self
            .prompt_address("Enter from address (0x...): ", None)
            .await?
        else {
            return Ok(());
        };
        let Some(to) = self
            .prompt_address("Enter to address (0x...): ", None)
            .await?
        else {
            return Ok(());
        };

        let confirmed = self
            .console
            .ask("Are you sure you want to burn tokens? (yes/no): ")
            .await?
            .is_some_and(|answer| input::is_confirmation(&answer));
        if !confirmed {
            return self.console.say("Burn operation cancelled.").await;
        }

        let burn = Burn { from, to };
        let success = format!("✅ Successfully burned tokens from {from} to {to}");
        self.submit(&burn, "Burning", success).await
    }

    /// Report the account's own token balance.
    pub async fn check_balance(&mut self) -> io::Result<()> {
        self.console.say("\n--- Checking Token Balance ---").await?;

        match token::balance_of(self.executor.client(), self.account).await {
            Ok(balance) => {
                self.console
                    .say(format!(
                        "\n💰 Your {} Balance: {balance}",
                        self.token.symbol
                    ))
                    .await
            }
            Err(e) => {
                self.console
                    .say(format!("❌ Failed to check balance: {e}"))
                    .await
            }
        }
    }

    async fn submit<A: Action>(
        &mut self,
        action: &A,
        operation: &str,
        success: String,
    ) -> io::Result<()> {
        let tx_hash = match self.executor.send(action).await {
            Ok(tx_hash) => tx_hash,
            Err(e) => return self.console.say(format!("❌ {operation} failed: {e}")).await,
        };
        self.console
            .say(format!("Transaction sent: {tx_hash}"))
            .await?;
        self.console
            .say("Waiting for transaction confirmation...")
            .await?;

        match self.executor.confirm(tx_hash).await {
            Ok(result) => {
                self.report(&result).await?;
                self.console.say(success).await
            }
            Err(e) => self.console.say(format!("❌ {operation} failed: {e}")).await,
        }
    }

    async fn report(&mut self, result: &TransactionResult) -> io::Result<()> {
        if let Some(block_number) = result.block_number {
            self.console
                .say(format!("Transaction confirmed in block: {block_number}"))
                .await?;
        }
        self.console
            .say(format!("Gas used: {}", result.gas_used))
            .await?;
        self.console
            .say(format!("Transaction fee: {} ETH", result.fee_ether()))
            .await
    }

    /// Ask for an address until a valid one is given.
    ///
    /// A blank answer selects `default` when there is one. Returns `None` when
    /// the attempts run out or input ends; the caller abandons its action.
    async fn prompt_address(
        &mut self,
        prompt: &str,
        default: Option<Address>,
    ) -> io::Result<Option<Address>> {
        self.prompt(prompt, |answer| match default {
            Some(default) if answer.is_empty() => Ok(default),
            _ => input::parse_address(answer),
        })
        .await
    }

    async fn prompt_amount(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt(prompt, input::parse_amount).await
    }

    async fn prompt<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> io::Result<Option<T>> {
        for _ in 0..self.max_attempts {
            let Some(answer) = self.console.ask(prompt).await? else {
                break;
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => debug!(%e, "Rejected input"),
            }
        }

        self.console
            .say("No valid input received, returning to menu.")
            .await?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parsing() {
        assert_eq!(Choice::parse("1"), Some(Choice::Approve));
        assert_eq!(Choice::parse("2"), Some(Choice::Transfer));
        assert_eq!(Choice::parse("3"), Some(Choice::CheckAllowance));
        assert_eq!(Choice::parse("4"), Some(Choice::Mint));
        assert_eq!(Choice::parse("5"), Some(Choice::Burn));
        assert_eq!(Choice::parse(" 6 "), Some(Choice::CheckBalance));
        assert_eq!(Choice::parse("7"), Some(Choice::Exit));
    }

    #[test]
    fn test_out_of_range_choices() {
        for answer in ["0", "8", "9", "", "exit", "1 2", "١"] {
            assert_eq!(Choice::parse(answer), None, "{answer:?}");
        }
    }

    #[test]
    fn test_menu_lists_every_choice() {
        for n in 1..=7 {
            assert!(MENU.contains(&format!("\n{n}. ")));
        }
    }
}
