//! Managed token contract bindings.

use alloy_sol_types::sol;

sol! {
    /// ERC20 token with minter and burner roles.
    #[sol(rpc)]
    interface IToken {
        /// Get token balance of an account
        function balanceOf(address account) external view returns (uint256);

        /// Get allowance granted by owner to spender
        function allowance(address owner, address spender) external view returns (uint256);

        /// Approve spender to spend tokens
        function approve(address spender, uint256 amount) external returns (bool);

        /// Transfer tokens from sender to recipient (requires allowance)
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);

        /// Mint new tokens to `to` (MINTER role only)
        function mintTokens(address to, uint256 amount) external;

        /// Burn the entire balance of `from`, crediting proceeds to `to` (BURNER role only)
        function burn(address from, address to) external;

        /// Get token name
        function name() external view returns (string memory);

        /// Get token symbol
        function symbol() external view returns (string memory);

        /// Get token decimals
        function decimals() external view returns (uint8);

        /// Get total supply
        function totalSupply() external view returns (uint256);
    }
}
